//! OOXML presentation writer.
//!
//! Translates a [`coursegen_core::Deck`] into a complete `.pptx` package:
//! one slide per section, a minimal slide master/layout/theme, and the
//! document properties PowerPoint expects. Text wrapping is left to the
//! consuming application; this crate only places shapes and runs.

mod package;
mod slide;
mod writer;
mod xml;

pub use writer::PptxWriter;
