//! Renderer trait and the generic fallback chain.

use crate::builtin::BuiltinRenderer;
use crate::pandoc::PandocRenderer;
use crate::weasyprint::WeasyPrintRenderer;
use coursegen_core::{Error, Result};
use std::path::PathBuf;

/// Everything a renderer needs to produce the workbook PDF.
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// Path of the workbook Markdown source on disk.
    pub workbook: PathBuf,

    /// The Markdown source, already read and NFC normalized.
    pub markdown: String,

    /// The workbook as a standalone HTML page with print CSS.
    pub html: String,

    /// Where the PDF must be written.
    pub output: PathBuf,
}

/// One way of turning the workbook into a PDF.
pub trait PdfRenderer {
    /// Short name used in logs and failure reports.
    fn name(&self) -> &'static str;

    /// Render the job to `job.output`. Must leave no file on failure
    /// being mistaken for success; the chain checks nothing beyond the
    /// returned result.
    fn render(&self, job: &RenderJob) -> Result<()>;
}

/// The standard chain, in fallback order.
pub fn default_renderers() -> Vec<Box<dyn PdfRenderer>> {
    vec![
        Box::new(WeasyPrintRenderer::new()),
        Box::new(PandocRenderer::new()),
        Box::new(BuiltinRenderer::new()),
    ]
}

/// Try each renderer in order; the first success wins.
///
/// Per-renderer failures are logged and collected. If every renderer
/// fails the error lists each attempt with its reason, and the caller is
/// expected to exit non-zero.
pub fn render_with_fallback(
    renderers: &[Box<dyn PdfRenderer>],
    job: &RenderJob,
) -> Result<&'static str> {
    let mut attempts: Vec<String> = Vec::new();

    for renderer in renderers {
        log::debug!("trying PDF renderer '{}'", renderer.name());
        match renderer.render(job) {
            Ok(()) => {
                log::info!("PDF generated with '{}'", renderer.name());
                return Ok(renderer.name());
            }
            Err(e) => {
                log::warn!("PDF renderer '{}' failed: {e}", renderer.name());
                attempts.push(format!("{}: {e}", renderer.name()));
            }
        }
    }

    Err(Error::AllRenderersFailed {
        attempts: attempts.join("; "),
    })
}
