//! Primary renderer: the WeasyPrint CLI.
//!
//! The workbook HTML (with its embedded CJK print stylesheet) is fed
//! over stdin; WeasyPrint resolves the font-family fallback chain itself.

use crate::renderer::{PdfRenderer, RenderJob};
use coursegen_core::{Error, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

const NAME: &str = "weasyprint";

/// Shells out to `weasyprint - <output.pdf>`.
#[derive(Debug)]
pub struct WeasyPrintRenderer {
    command: String,
}

impl WeasyPrintRenderer {
    pub fn new() -> Self {
        Self::with_command("weasyprint")
    }

    fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for WeasyPrintRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfRenderer for WeasyPrintRenderer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn render(&self, job: &RenderJob) -> Result<()> {
        let mut child = Command::new(&self.command)
            .arg("-")
            .arg(&job.output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // Feed stdin from its own thread. The parent must be draining
        // stderr while the child reads stdin; a child that fills its
        // stderr pipe first would otherwise deadlock against our write.
        let feeder = child.stdin.take().map(|mut stdin| {
            let html = job.html.clone();
            thread::spawn(move || stdin.write_all(html.as_bytes()))
        });

        let output = child.wait_with_output().map_err(|e| Error::RendererFailed {
            name: NAME,
            reason: format!("failed to wait for process: {e}"),
        })?;

        let stdin_result = match feeder {
            Some(handle) => handle.join().unwrap_or(Ok(())),
            None => Ok(()),
        };

        if !output.status.success() {
            let _ = std::fs::remove_file(&job.output);
            return Err(Error::RendererFailed {
                name: NAME,
                reason: format!(
                    "exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        // A broken pipe with a successful exit means the child stopped
        // reading early but still produced the PDF.
        match stdin_result {
            Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                Err(Error::RendererFailed {
                    name: NAME,
                    reason: format!("failed to write HTML to stdin: {e}"),
                })
            }
            _ => Ok(()),
        }
    }
}

fn spawn_error(e: std::io::Error) -> Error {
    let reason = if e.kind() == std::io::ErrorKind::NotFound {
        "weasyprint not installed".to_string()
    } else {
        format!("failed to spawn: {e}")
    };
    Error::RendererFailed { name: NAME, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn job_with(html: String, output: PathBuf) -> RenderJob {
        RenderJob {
            workbook: PathBuf::from("unused.md"),
            markdown: String::new(),
            html,
            output,
        }
    }

    #[test]
    fn missing_binary_is_the_not_installed_failure() {
        let renderer = WeasyPrintRenderer::with_command("definitely-not-a-real-weasyprint");
        let dir = tempfile::tempdir().unwrap();
        let err = renderer
            .render(&job_with("<html></html>".into(), dir.path().join("out.pdf")))
            .unwrap_err();
        match err {
            Error::RendererFailed { reason, .. } => assert!(reason.contains("not installed")),
            other => panic!("unexpected error: {other}"),
        }
    }

    // A child that floods stderr before touching stdin: the render must
    // still finish because stdin is fed from a separate thread while the
    // parent drains stderr.
    #[cfg(unix)]
    #[test]
    fn noisy_child_with_large_input_does_not_deadlock() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-weasyprint");
        std::fs::write(
            &script,
            "#!/bin/sh\n\
             i=0\n\
             while [ $i -lt 4000 ]; do echo \"WARNING: noisy line $i\" 1>&2; i=$((i+1)); done\n\
             cat - > /dev/null\n\
             printf '%%PDF-fake' > \"$2\"\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let renderer = WeasyPrintRenderer::with_command(script.to_string_lossy().into_owned());
        let output = dir.path().join("out.pdf");
        let html = "<p>내용</p>".repeat(100_000);
        renderer.render(&job_with(html, output.clone())).unwrap();
        assert!(std::fs::read(&output).unwrap().starts_with(b"%PDF"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_child_leaves_no_output_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-weasyprint");
        std::fs::write(
            &script,
            "#!/bin/sh\n\
             cat - > \"$2\"\n\
             echo 'boom' 1>&2\n\
             exit 3\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let renderer = WeasyPrintRenderer::with_command(script.to_string_lossy().into_owned());
        let output = dir.path().join("out.pdf");
        let err = renderer
            .render(&job_with("<html></html>".into(), output.clone()))
            .unwrap_err();
        match err {
            Error::RendererFailed { reason, .. } => assert!(reason.contains("boom")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!output.exists());
    }
}
