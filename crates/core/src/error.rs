//! Error types for course material generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating course materials.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook Markdown file was not found at any candidate path.
    #[error("workbook markdown not found; searched: {searched}")]
    WorkbookNotFound {
        /// The candidate paths that were checked, joined with ", ".
        searched: String,
    },

    /// The content table is malformed (e.g. a section with an empty title).
    #[error("invalid deck: {0}")]
    InvalidDeck(String),

    /// ZIP packaging error (for PPTX).
    #[error("ZIP error: {0}")]
    Zip(String),

    /// A single PDF renderer failed.
    #[error("renderer '{name}' failed: {reason}")]
    RendererFailed { name: &'static str, reason: String },

    /// Every renderer in the PDF fallback chain failed.
    #[error("all PDF renderers failed: {attempts}")]
    AllRenderersFailed { attempts: String },

    /// Low-level PDF drawing error (built-in renderer).
    #[error("PDF build error: {0}")]
    Pdf(String),

    /// Build-info sidecar serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
