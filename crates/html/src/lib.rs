//! HTML output: Markdown conversion, per-section slide pages, and the
//! `index.html` landing page.

mod escape;
mod index;
mod markdown;
mod slides;

pub use escape::escape_html;
pub use index::render_index;
pub use markdown::{markdown_to_html, workbook_page};
pub use slides::render_section_page;
