//! Per-slide XML generation.
//!
//! Every shape is an explicit text box with its own transform; no layout
//! placeholders are referenced, so a slide can never index a shape that
//! does not exist.

use crate::package::{SLIDE_CX, SLIDE_CY};
use crate::xml::escape_xml;
use coursegen_core::palette;
use coursegen_core::{content, BodyItem, Rgb, Section, SectionKind};
use std::fmt::Write as _;

const FONT: &str = "Noto Sans KR";

/// Margin around slide content, in EMU.
const MARGIN: i64 = 457_200;

struct Run<'a> {
    text: &'a str,
    /// Font size in points.
    size: u32,
    color: Rgb,
    bold: bool,
}

struct Paragraph<'a> {
    runs: Vec<Run<'a>>,
    centered: bool,
    /// Bullet level; `None` renders without a bullet character.
    bullet_level: Option<u8>,
}

/// Render one section to a complete `ppt/slides/slideN.xml` part.
pub fn render_slide(section: &Section, date_line: &str) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>"#,
    );

    match section.kind {
        SectionKind::Title => write_title_slide(&mut xml, section, date_line),
        SectionKind::Content | SectionKind::Contact => write_content_slide(&mut xml, section),
    }

    xml.push_str(r#"</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#);
    xml
}

fn write_title_slide(xml: &mut String, section: &Section, date_line: &str) {
    // Large centered title in the upper half.
    let title = vec![Paragraph {
        runs: vec![Run {
            text: &section.title,
            size: 44,
            color: section.accent,
            bold: true,
        }],
        centered: true,
        bullet_level: None,
    }];
    write_text_box(xml, 2, "Title", MARGIN, 1_828_800, SLIDE_CX - 2 * MARGIN, 1_371_600, &title);

    // Subtitle lines plus the build date.
    let mut paragraphs: Vec<Paragraph> = section
        .body
        .iter()
        .filter_map(|item| match item {
            BodyItem::Lead(text) => Some(Paragraph {
                runs: vec![Run {
                    text,
                    size: 24,
                    color: palette::DARK_GRAY,
                    bold: false,
                }],
                centered: true,
                bullet_level: None,
            }),
            _ => None,
        })
        .collect();
    paragraphs.push(Paragraph {
        runs: vec![Run {
            text: date_line,
            size: 18,
            color: palette::GREEN,
            bold: false,
        }],
        centered: true,
        bullet_level: None,
    });
    write_text_box(
        xml,
        3,
        "Subtitle",
        MARGIN,
        3_429_000,
        SLIDE_CX - 2 * MARGIN,
        1_828_800,
        &paragraphs,
    );
}

fn write_content_slide(xml: &mut String, section: &Section) {
    let title = vec![Paragraph {
        runs: vec![Run {
            text: &section.title,
            size: 32,
            color: section.accent,
            bold: true,
        }],
        centered: false,
        bullet_level: None,
    }];
    write_text_box(xml, 2, "Title", MARGIN, 274_638, SLIDE_CX - 2 * MARGIN, 1_143_000, &title);

    let mut paragraphs: Vec<Paragraph> = Vec::new();
    for item in &section.body {
        match item {
            BodyItem::Lead(text) => paragraphs.push(Paragraph {
                runs: vec![Run {
                    text,
                    size: 22,
                    color: palette::DARK_GRAY,
                    bold: true,
                }],
                centered: false,
                bullet_level: None,
            }),
            BodyItem::Bullet(text) => paragraphs.push(Paragraph {
                runs: vec![Run {
                    text,
                    size: 18,
                    color: palette::DARK_GRAY,
                    bold: false,
                }],
                centered: false,
                bullet_level: Some(1),
            }),
            BodyItem::Group { heading, items } => {
                paragraphs.push(Paragraph {
                    runs: vec![Run {
                        text: heading,
                        size: 18,
                        color: palette::DARK_GRAY,
                        bold: true,
                    }],
                    centered: false,
                    bullet_level: Some(1),
                });
                for item in items {
                    paragraphs.push(Paragraph {
                        runs: vec![Run {
                            text: item,
                            size: 16,
                            color: palette::DARK_GRAY,
                            bold: false,
                        }],
                        centered: false,
                        bullet_level: Some(2),
                    });
                }
            }
        }
    }

    if section.kind == SectionKind::Contact {
        paragraphs.push(Paragraph {
            runs: vec![Run {
                text: content::CLOSING_MESSAGE,
                size: 18,
                color: palette::GREEN,
                bold: true,
            }],
            centered: false,
            bullet_level: None,
        });
    }

    write_text_box(
        xml,
        3,
        "Body",
        628_650,
        1_600_200,
        SLIDE_CX - 2 * 628_650,
        SLIDE_CY - 1_600_200 - MARGIN,
        &paragraphs,
    );
}

#[allow(clippy::too_many_arguments)]
fn write_text_box(
    xml: &mut String,
    id: u32,
    name: &str,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
    paragraphs: &[Paragraph],
) {
    let _ = write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr><p:txBody><a:bodyPr wrap="square"><a:normAutofit/></a:bodyPr><a:lstStyle/>"#,
    );
    for paragraph in paragraphs {
        write_paragraph(xml, paragraph);
    }
    xml.push_str("</p:txBody></p:sp>");
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) {
    xml.push_str("<a:p>");

    let algn = if paragraph.centered {
        r#" algn="ctr""#
    } else {
        ""
    };
    match paragraph.bullet_level {
        Some(level) => {
            let indent = 342_900 * i64::from(level);
            let _ = write!(
                xml,
                r#"<a:pPr{algn} marL="{indent}" indent="-342900" lvl="{level}"><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/></a:pPr>"#,
            );
        }
        None => {
            let _ = write!(xml, "<a:pPr{algn}><a:buNone/></a:pPr>");
        }
    }

    for run in &paragraph.runs {
        let bold = if run.bold { r#" b="1""# } else { "" };
        let _ = write!(
            xml,
            r#"<a:r><a:rPr lang="ko-KR" sz="{}"{bold} dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:latin typeface="{FONT}"/><a:ea typeface="{FONT}"/></a:rPr><a:t>{}</a:t></a:r>"#,
            run.size * 100,
            run.color.hex(),
            escape_xml(run.text),
        );
    }
    xml.push_str("</a:p>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_core::content::course_deck;

    #[test]
    fn title_slide_centers_title_at_44pt() {
        let deck = course_deck();
        let xml = render_slide(&deck.sections[0], "2025년 01월 01일");
        assert!(xml.contains(r#"algn="ctr""#));
        assert!(xml.contains(r#"sz="4400""#));
        assert!(xml.contains("수업을 쉽게"));
        assert!(xml.contains("2025년 01월 01일"));
    }

    #[test]
    fn content_slide_bullets_carry_levels() {
        let deck = course_deck();
        let xml = render_slide(&deck.sections[1], "");
        assert!(xml.contains(r#"lvl="1""#));
        assert!(xml.contains("교육 목표"));
        assert!(xml.contains(r#"sz="1800""#));
    }

    #[test]
    fn contact_slide_has_closing_message() {
        let deck = course_deck();
        let xml = render_slide(deck.sections.last().unwrap(), "");
        assert!(xml.contains(content::CLOSING_MESSAGE));
    }

    #[test]
    fn group_items_nest_one_level_deeper() {
        let deck = course_deck();
        let practice = deck
            .sections
            .iter()
            .find(|s| s.id == "practice_scenarios")
            .unwrap();
        let xml = render_slide(practice, "");
        assert!(xml.contains(r#"lvl="2""#));
    }
}
