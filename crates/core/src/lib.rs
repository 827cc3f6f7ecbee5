//! Content model, configuration, and output handling for the course
//! material generator.

pub mod buildinfo;
pub mod config;
pub mod content;
pub mod error;
pub mod output;
pub mod palette;
pub mod text;
pub mod types;

pub use buildinfo::BuildInfo;
pub use config::BuildConfig;
pub use error::{Error, Result};
pub use output::OutputWriter;
pub use palette::Rgb;
pub use types::{BodyItem, Deck, Section, SectionKind};
