//! Tertiary renderer: direct PDF drawing via `printpdf`.
//!
//! No HTML engine involved: the Markdown is laid out line by line with a
//! manually registered Korean font. Output quality is deliberately
//! modest; this path exists so the chain can still produce a readable
//! workbook when neither external tool is installed.

use crate::fonts::find_font;
use crate::renderer::{PdfRenderer, RenderJob};
use coursegen_core::text::{classify_lines, wrap_line, MarkdownLine};
use coursegen_core::{Error, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};
use std::fs::File;
use std::io::BufWriter;

const NAME: &str = "builtin";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const PT_TO_MM: f32 = 0.3528;

/// Draws the workbook PDF directly.
#[derive(Debug, Default)]
pub struct BuiltinRenderer;

impl BuiltinRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PdfRenderer for BuiltinRenderer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn render(&self, job: &RenderJob) -> Result<()> {
        let (doc, page, layer) =
            PdfDocument::new("워크북", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
        let font = register_font(&doc)?;

        let mut current_layer = doc.get_page(page).get_layer(layer);
        let mut cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;

        for line in classify_lines(&job.markdown) {
            let (text, size_pt, gap_mm) = match line {
                MarkdownLine::Blank => {
                    cursor_y -= 3.0;
                    continue;
                }
                MarkdownLine::Heading(1, text) => (text.to_string(), 22.0, 6.0),
                MarkdownLine::Heading(2, text) => (text.to_string(), 18.0, 5.0),
                MarkdownLine::Heading(_, text) => (text.to_string(), 14.0, 4.0),
                MarkdownLine::Bullet(text) => (format!("• {text}"), 11.0, 1.5),
                MarkdownLine::Paragraph(text) => (text.to_string(), 11.0, 1.5),
            };

            let line_height = size_pt * PT_TO_MM * 1.6;
            let usable_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
            let max_chars = (usable_width / (size_pt * PT_TO_MM)).max(8.0) as usize;

            for wrapped in wrap_line(&text, max_chars) {
                if cursor_y - line_height < MARGIN_MM {
                    let (next_page, next_layer) =
                        doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
                    current_layer = doc.get_page(next_page).get_layer(next_layer);
                    cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;
                }
                cursor_y -= line_height;
                current_layer.use_text(wrapped, size_pt, Mm(MARGIN_MM), Mm(cursor_y), &font);
            }
            cursor_y -= gap_mm;
        }

        let file = File::create(&job.output)?;
        doc.save(&mut BufWriter::new(file)).map_err(|e| {
            let _ = std::fs::remove_file(&job.output);
            Error::Pdf(format!("failed to save PDF: {e}"))
        })?;
        Ok(())
    }
}

/// Register a Korean system font, falling back to the builtin Helvetica
/// (which cannot shape Hangul, but keeps the chain alive) when none is
/// found.
fn register_font(doc: &PdfDocumentReference) -> Result<IndirectFontRef> {
    if let Some(path) = find_font() {
        log::debug!("registering font {}", path.display());
        let file = File::open(&path)?;
        return doc
            .add_external_font(file)
            .map_err(|e| Error::Pdf(format!("failed to register '{}': {e}", path.display())));
    }

    log::warn!("no Korean font found; falling back to builtin Helvetica");
    doc.add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Pdf(format!("failed to load builtin font: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_a_nonempty_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("workbook.pdf");
        let job = RenderJob {
            workbook: PathBuf::from("unused.md"),
            markdown: "# Workbook\n\nSome text.\n\n- first\n- second\n".into(),
            html: String::new(),
            output: output.clone(),
        };
        BuiltinRenderer::new().render(&job).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.len() > 100);
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_documents_break_onto_extra_pages() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("long.pdf");
        let mut markdown = String::from("# Long\n\n");
        for i in 0..200 {
            markdown.push_str(&format!("Paragraph number {i} with enough words.\n\n"));
        }
        let job = RenderJob {
            workbook: PathBuf::from("unused.md"),
            markdown,
            html: String::new(),
            output: output.clone(),
        };
        BuiltinRenderer::new().render(&job).unwrap();
        assert!(std::fs::read(&output).unwrap().starts_with(b"%PDF"));
    }
}
