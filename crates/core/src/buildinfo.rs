//! Build-info sidecar written alongside the generated artifacts.

use crate::config::{BuildConfig, BUILD_VERSION};
use crate::types::Deck;
use serde::{Deserialize, Serialize};

/// Contents of `build_info.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildInfo {
    /// ISO-8601 build time.
    pub build_date: String,

    /// Korean-formatted build time.
    pub build_date_kr: String,

    /// Version tag of the generator.
    pub build_version: String,

    /// Course title.
    pub title: String,

    /// Course subtitle.
    pub subtitle: String,

    /// Number of sections in the deck.
    pub slides_count: usize,

    /// Files written to the output directory during this build.
    pub generated_files: Vec<String>,
}

impl BuildInfo {
    /// Assemble build info for a deck and the files produced this run.
    pub fn new(cfg: &BuildConfig, deck: &Deck, generated_files: Vec<String>) -> Self {
        Self {
            build_date: cfg.build_date.clone(),
            build_date_kr: cfg.build_date_kr.clone(),
            build_version: BUILD_VERSION.to_string(),
            title: deck.title.clone(),
            subtitle: deck.subtitle.clone(),
            slides_count: deck.sections.len(),
            generated_files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::course_deck;

    #[test]
    fn serializes_korean_without_escaping() {
        let cfg = BuildConfig::with_timestamp("/p", Some("20250101_0900".into()));
        let deck = course_deck();
        let info = BuildInfo::new(&cfg, &deck, vec!["index.html".into()]);
        let json = serde_json::to_string_pretty(&info).unwrap();
        // serde_json keeps UTF-8 as-is; Korean must survive verbatim.
        assert!(json.contains("한글학교"));
        assert!(json.contains("\"slides_count\": 10"));
    }

    #[test]
    fn timestamp_override_reaches_the_sidecar() {
        let cfg = BuildConfig::with_timestamp("/p", Some("20990101_0000".into()));
        let info = BuildInfo::new(&cfg, &course_deck(), Vec::new());
        let json = serde_json::to_string_pretty(&info).unwrap();
        assert!(json.contains("2099-01-01"));
        assert!(json.contains("2099년 01월 01일"));
    }
}
