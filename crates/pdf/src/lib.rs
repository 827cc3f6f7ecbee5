//! PDF workbook rendering.
//!
//! Font and engine availability is unpredictable across execution
//! environments, so the workbook is produced by an ordered fallback
//! chain: the WeasyPrint CLI, then Pandoc, then a built-in renderer that
//! draws the PDF directly. The first renderer to succeed wins.

mod builtin;
mod fonts;
mod pandoc;
mod renderer;
mod weasyprint;
mod workbook;

pub use builtin::BuiltinRenderer;
pub use pandoc::PandocRenderer;
pub use renderer::{default_renderers, render_with_fallback, PdfRenderer, RenderJob};
pub use weasyprint::WeasyPrintRenderer;
pub use workbook::{locate_workbook, read_workbook};
