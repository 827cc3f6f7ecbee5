//! Locating and reading the workbook Markdown source.

use coursegen_core::text::nfc;
use coursegen_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Find the workbook Markdown at the first existing candidate path.
///
/// Returns [`Error::WorkbookNotFound`] listing every searched path when
/// none exists; callers report that and abort the PDF step without
/// touching the fallback chain.
pub fn locate_workbook(candidates: &[PathBuf]) -> Result<PathBuf> {
    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| Error::WorkbookNotFound {
            searched: candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Read the workbook source, NFC normalized.
pub fn read_workbook(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    Ok(nfc(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_workbook_is_a_structured_error() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![
            dir.path().join("docs/chrome_edu_workbook.md"),
            dir.path().join("chrome_edu_workbook.md"),
        ];
        let err = locate_workbook(&candidates).unwrap_err();
        match err {
            Error::WorkbookNotFound { searched } => {
                assert!(searched.contains("chrome_edu_workbook.md"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("chrome_edu_workbook.md");
        std::fs::write(&second, "# 워크북\n").unwrap();
        let candidates = vec![dir.path().join("docs/chrome_edu_workbook.md"), second.clone()];
        assert_eq!(locate_workbook(&candidates).unwrap(), second);
    }
}
