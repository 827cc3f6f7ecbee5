//! Secondary renderer: Pandoc with an external PDF engine.

use crate::renderer::{PdfRenderer, RenderJob};
use coursegen_core::{Error, Result};
use std::process::Command;

const NAME: &str = "pandoc";

/// Shells out to `pandoc` with CJK font variables and the wkhtmltopdf
/// engine, reading the workbook Markdown from disk.
#[derive(Debug, Default)]
pub struct PandocRenderer;

impl PandocRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PdfRenderer for PandocRenderer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn render(&self, job: &RenderJob) -> Result<()> {
        let output = Command::new("pandoc")
            .arg(&job.workbook)
            .arg("-o")
            .arg(&job.output)
            .args(["--pdf-engine=wkhtmltopdf", "--standalone"])
            .args(["--variable", "mainfont=Noto Sans CJK KR"])
            .args(["--variable", "sansfont=Noto Sans CJK KR"])
            .args(["--variable", "fontsize=11pt"])
            .args(["--variable", "linestretch=1.6"])
            .args(["--variable", "margin-top=25mm"])
            .args(["--variable", "margin-bottom=25mm"])
            .args(["--variable", "margin-left=20mm"])
            .args(["--variable", "margin-right=20mm"])
            .args(["--variable", "papersize=a4"])
            .output()
            .map_err(|e| {
                let reason = if e.kind() == std::io::ErrorKind::NotFound {
                    "pandoc not installed".to_string()
                } else {
                    format!("failed to spawn: {e}")
                };
                Error::RendererFailed { name: NAME, reason }
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let _ = std::fs::remove_file(&job.output);
            Err(Error::RendererFailed {
                name: NAME,
                reason: format!(
                    "exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            })
        }
    }
}
