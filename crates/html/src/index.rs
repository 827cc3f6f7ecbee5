//! The `index.html` landing page.

use crate::escape::escape_html;
use coursegen_core::config::{BuildConfig, PDF_FILENAME, PPTX_FILENAME};
use coursegen_core::Deck;
use std::fmt::Write as _;

const INDEX_CSS: &str = r#"
body {
    font-family: 'Noto Sans KR', sans-serif;
    background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%);
    margin: 0;
    color: #1f2937;
}
.hero {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: #fff;
    text-align: center;
    padding: 4rem 1rem;
}
.hero h1 { font-size: 2.5rem; margin: 0 0 0.5rem; }
.hero p { opacity: 0.9; max-width: 48rem; margin: 0.5rem auto; }
.badge {
    display: inline-block;
    background: rgba(255,255,255,0.2);
    border-radius: 999px;
    padding: 0.5rem 1.25rem;
    margin-top: 1rem;
    font-size: 0.9rem;
}
.dots span { display: inline-block; width: 14px; height: 14px; border-radius: 50%; margin: 1.5rem 6px 0; }
.container { max-width: 72rem; margin: 0 auto; padding: 3rem 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.card {
    background: #fff;
    border-radius: 12px;
    overflow: hidden;
    box-shadow: 0 8px 24px rgba(0,0,0,0.08);
    display: flex;
    flex-direction: column;
}
.card .bar { height: 8px; }
.card .body { padding: 1.5rem; flex: 1; }
.card h3 { margin: 0 0 0.5rem; }
.card p { color: #6b7280; font-size: 0.9rem; }
.card a { color: #4285f4; font-weight: 700; text-decoration: none; }
.downloads { background: #fff; border-radius: 12px; padding: 2rem; margin-top: 3rem; text-align: center; }
.downloads a { margin: 0 1rem; color: #4285f4; font-weight: 700; }
footer { text-align: center; color: #6b7280; padding: 2rem 1rem 3rem; }
footer code { background: #e5e7eb; border-radius: 4px; padding: 2px 6px; font-size: 0.8rem; }
"#;

/// Render the landing page: hero, one card per section linking to its
/// page, download links, and the build-time footer.
pub fn render_index(deck: &Deck, cfg: &BuildConfig) -> String {
    let mut cards = String::new();
    for (idx, section) in deck.sections.iter().enumerate() {
        let _ = write!(
            cards,
            r#"<div class="card"><div class="bar" style="background: {accent}"></div><div class="body"><h3>슬라이드 {number:02}</h3><p>{description}</p><a href="{href}">{title} 보기</a></div></div>"#,
            accent = section.accent.css(),
            number = idx + 1,
            description = escape_html(&section.description),
            href = escape_html(&section.page_filename()),
            title = escape_html(&section.title),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link href="https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@400;700&display=swap" rel="stylesheet">
<style>{INDEX_CSS}</style>
</head>
<body>
<div class="hero">
<h1>{title}</h1>
<p>{subtitle}</p>
<p>기초부터 고급까지 단계별로 구성된 실습 중심의 교육 자료입니다.</p>
<div class="badge">최종 업데이트: {build_time}</div>
<div class="dots"><span style="background:#4285f4"></span><span style="background:#ea4335"></span><span style="background:#fbbc05"></span><span style="background:#34a853"></span></div>
</div>
<div class="container">
<div class="grid">
{cards}
</div>
<div class="downloads">
<h2>다운로드 자료</h2>
<a href="{pptx}">PowerPoint 프레젠테이션</a>
<a href="{pdf}">실습 워크북 (PDF)</a>
</div>
</div>
<footer>
<p>생성일: {build_time}</p>
<p>빌드 ID: <code>{build_id}</code></p>
<p>한글교육의 디지털 혁신을 응원합니다</p>
</footer>
</body>
</html>"#,
        title = escape_html(&deck.title),
        subtitle = escape_html(&deck.subtitle),
        build_time = escape_html(&cfg.build_date_kr),
        build_id = escape_html(&cfg.build_date),
        pptx = PPTX_FILENAME,
        pdf = PDF_FILENAME,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_core::content::course_deck;
    use coursegen_core::palette;
    use coursegen_core::{Section, SectionKind};

    fn cfg() -> BuildConfig {
        BuildConfig::with_timestamp("/p", Some("20250101_0900".into()))
    }

    #[test]
    fn three_sections_yield_three_anchors_with_expected_targets() {
        let mut deck = Deck::new("t", "s");
        for (id, title) in [("a", "A"), ("b", "B"), ("c", "C")] {
            deck.add_section(Section::new(
                id,
                title,
                title,
                SectionKind::Content,
                palette::BLUE,
            ));
        }

        let html = render_index(&deck, &cfg());
        for id in ["a", "b", "c"] {
            assert!(html.contains(&format!(r#"href="{id}.html""#)));
        }
        assert_eq!(html.matches(".html\">").count(), 3);
    }

    #[test]
    fn index_links_download_artifacts() {
        let html = render_index(&course_deck(), &cfg());
        assert!(html.contains(PPTX_FILENAME));
        assert!(html.contains(PDF_FILENAME));
    }

    #[test]
    fn index_shows_korean_build_time() {
        let html = render_index(&course_deck(), &cfg());
        assert!(html.contains("최종 업데이트"));
    }
}
