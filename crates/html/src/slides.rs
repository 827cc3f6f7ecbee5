//! Per-section slide pages.

use crate::escape::escape_html;
use coursegen_core::{content, BodyItem, Section, SectionKind};
use std::fmt::Write as _;

const PAGE_CSS: &str = r#"
body {
    font-family: 'Noto Sans KR', sans-serif;
    background: #f5f7fa;
    margin: 0;
}
.slide {
    max-width: 960px;
    margin: 3rem auto;
    padding: 3rem;
    background: #fff;
    border-radius: 12px;
    box-shadow: 0 10px 30px rgba(0,0,0,0.08);
}
.slide h1 { margin-top: 0; }
.slide .lead { font-size: 1.25rem; font-weight: 700; color: #3c4043; }
.slide ul { line-height: 1.9; color: #3c4043; }
.slide .closing { color: #34a853; font-weight: 700; margin-top: 2rem; }
.back { display: block; max-width: 960px; margin: 0 auto 3rem; color: #4285f4; }
"#;

/// Render one section as a standalone HTML slide page.
pub fn render_section_page(section: &Section) -> String {
    let mut body = String::new();
    let mut in_list = false;

    let open_list = |body: &mut String, in_list: &mut bool| {
        if !*in_list {
            body.push_str("<ul>");
            *in_list = true;
        }
    };
    let close_list = |body: &mut String, in_list: &mut bool| {
        if *in_list {
            body.push_str("</ul>");
            *in_list = false;
        }
    };

    for item in &section.body {
        match item {
            BodyItem::Lead(text) => {
                close_list(&mut body, &mut in_list);
                let _ = write!(body, r#"<p class="lead">{}</p>"#, escape_html(text));
            }
            BodyItem::Bullet(text) => {
                open_list(&mut body, &mut in_list);
                let _ = write!(body, "<li>{}</li>", escape_html(text));
            }
            BodyItem::Group { heading, items } => {
                open_list(&mut body, &mut in_list);
                let _ = write!(body, "<li><strong>{}</strong><ul>", escape_html(heading));
                for item in items {
                    let _ = write!(body, "<li>{}</li>", escape_html(item));
                }
                body.push_str("</ul></li>");
            }
        }
    }
    close_list(&mut body, &mut in_list);

    let closing = if section.kind == SectionKind::Contact {
        format!(
            r#"<p class="closing">🌟 {} 🌟</p>"#,
            escape_html(content::CLOSING_MESSAGE)
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link href="https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@400;700&display=swap" rel="stylesheet">
<style>{PAGE_CSS}</style>
</head>
<body>
<div class="slide">
<h1 style="color: {accent}">{title}</h1>
{body}
{closing}
</div>
<a class="back" href="index.html">← 전체 목차로 돌아가기</a>
</body>
</html>"#,
        title = escape_html(&section.title),
        accent = section.accent.css(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_core::content::course_deck;

    #[test]
    fn section_page_contains_title_and_bullets() {
        let deck = course_deck();
        let page = render_section_page(&deck.sections[1]);
        assert!(page.contains("강의 개요"));
        assert!(page.contains("<ul>"));
        assert!(page.contains("크롬 브라우저의 교육적 활용 능력 향상"));
    }

    #[test]
    fn contact_page_has_closing_message() {
        let deck = course_deck();
        let page = render_section_page(deck.sections.last().unwrap());
        assert!(page.contains(content::CLOSING_MESSAGE));
    }

    #[test]
    fn lead_stays_outside_the_list() {
        let deck = course_deck();
        let page = render_section_page(&deck.sections[1]);
        let lead_pos = page.find(r#"class="lead""#).unwrap();
        let ul_pos = page.find("<ul>").unwrap();
        assert!(lead_pos < ul_pos);
    }

    #[test]
    fn grouped_items_nest() {
        let deck = course_deck();
        let practice = deck
            .sections
            .iter()
            .find(|s| s.id == "practice_scenarios")
            .unwrap();
        let page = render_section_page(practice);
        assert!(page.contains("<li><strong>기초</strong><ul>"));
    }
}
