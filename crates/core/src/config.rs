//! Build configuration.
//!
//! All paths the generators touch come from this struct; nothing below it
//! reads the process working directory or the environment.

use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the recorded build timestamp
/// (set by CI so build metadata stays reproducible).
pub const TIMESTAMP_ENV: &str = "BUILD_TIMESTAMP";

/// Format of the compact build timestamp.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Korean display format for build dates.
const KR_DATE_FORMAT: &str = "%Y년 %m월 %d일 %H시 %M분";

/// Canonical artifact filenames. Fixed names, overwritten atomically on
/// every run; the build timestamp lives in `build_info.json` instead.
pub const PPTX_FILENAME: &str = "chrome_education_slides.pptx";
pub const PDF_FILENAME: &str = "chrome_edu_workbook.pdf";
pub const INDEX_FILENAME: &str = "index.html";
pub const BUILD_INFO_FILENAME: &str = "build_info.json";

/// Version tag recorded in the build-info sidecar.
pub const BUILD_VERSION: &str = "3.0.0";

/// Top-level configuration injected into every generator.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root; relative inputs are resolved against it.
    pub project_dir: PathBuf,

    /// Where all artifacts are written.
    pub output_dir: PathBuf,

    /// Pre-rendered slides and images copied verbatim when present.
    pub assets_dir: PathBuf,

    /// Candidate locations of the workbook Markdown, tried in order.
    pub workbook_candidates: Vec<PathBuf>,

    /// Compact timestamp (`YYYYmmdd_HHMM`) recorded for this build.
    pub timestamp: String,

    /// ISO-8601 build time.
    pub build_date: String,

    /// Korean-formatted build time for display.
    pub build_date_kr: String,
}

impl BuildConfig {
    /// Build a configuration rooted at `project_dir`, taking the timestamp
    /// from [`TIMESTAMP_ENV`] when set and from the local clock otherwise.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        let timestamp = std::env::var(TIMESTAMP_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty());
        Self::with_timestamp(project_dir, timestamp)
    }

    /// Build a configuration with an explicit timestamp override.
    ///
    /// An explicit `YYYYmmdd_HHMM` timestamp also drives the recorded
    /// build dates, so an overridden build carries no wall-clock residue
    /// in `build_info.json` or the generated pages.
    pub fn with_timestamp(project_dir: impl AsRef<Path>, timestamp: Option<String>) -> Self {
        let project_dir = project_dir.as_ref().to_path_buf();
        let (timestamp, build_date, build_date_kr) = match timestamp {
            Some(ts) => match NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT) {
                Ok(dt) => (
                    ts,
                    dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    dt.format(KR_DATE_FORMAT).to_string(),
                ),
                Err(_) => {
                    log::warn!(
                        "build timestamp '{ts}' is not {TIMESTAMP_FORMAT}; dating the build from the clock"
                    );
                    let now = Local::now();
                    (ts, now.to_rfc3339(), now.format(KR_DATE_FORMAT).to_string())
                }
            },
            None => {
                let now = Local::now();
                (
                    now.format(TIMESTAMP_FORMAT).to_string(),
                    now.to_rfc3339(),
                    now.format(KR_DATE_FORMAT).to_string(),
                )
            }
        };

        let workbook_candidates = vec![
            project_dir.join("docs/chrome_edu_workbook.md"),
            project_dir.join("chrome_edu_workbook.md"),
            project_dir
                .parent()
                .map(|p| p.join("chrome_edu_workbook.md"))
                .unwrap_or_else(|| PathBuf::from("../chrome_edu_workbook.md")),
        ];

        Self {
            output_dir: project_dir.join("output"),
            assets_dir: project_dir.join("assets"),
            workbook_candidates,
            project_dir,
            timestamp,
            build_date,
            build_date_kr,
        }
    }

    /// Replace the output directory (CLI `--output`).
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Absolute path of the PPTX artifact.
    pub fn pptx_path(&self) -> PathBuf {
        self.output_dir.join(PPTX_FILENAME)
    }

    /// Absolute path of the PDF artifact.
    pub fn pdf_path(&self) -> PathBuf {
        self.output_dir.join(PDF_FILENAME)
    }

    /// Absolute path of the landing page.
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_timestamp_is_used_verbatim() {
        let cfg = BuildConfig::with_timestamp("/tmp/project", Some("20250101_0900".into()));
        assert_eq!(cfg.timestamp, "20250101_0900");
    }

    #[test]
    fn explicit_timestamp_drives_recorded_build_dates() {
        let cfg = BuildConfig::with_timestamp("/p", Some("20990101_0000".into()));
        assert!(cfg.build_date.starts_with("2099-01-01T00:00"));
        assert_eq!(cfg.build_date_kr, "2099년 01월 01일 00시 00분");
    }

    #[test]
    fn unparseable_timestamp_is_kept_but_dated_from_the_clock() {
        let cfg = BuildConfig::with_timestamp("/p", Some("release-candidate".into()));
        assert_eq!(cfg.timestamp, "release-candidate");
        assert!(!cfg.build_date.is_empty());
    }

    #[test]
    fn paths_are_rooted_at_project_dir() {
        let cfg = BuildConfig::with_timestamp("/tmp/project", None);
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/project/output"));
        assert!(cfg.workbook_candidates[0].ends_with("docs/chrome_edu_workbook.md"));
        assert_eq!(cfg.workbook_candidates.len(), 3);
    }

    #[test]
    fn artifact_names_are_fixed() {
        let cfg = BuildConfig::with_timestamp("/p", None);
        assert!(cfg.pptx_path().ends_with(PPTX_FILENAME));
        assert!(cfg.pdf_path().ends_with(PDF_FILENAME));
    }
}
