//! Output directory handling.
//!
//! Artifacts are staged to a `.tmp` sibling and renamed into place so a
//! crash mid-write never leaves a partial file at a final path.

use crate::buildinfo::BuildInfo;
use crate::config::BUILD_INFO_FILENAME;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes artifacts into a single output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    /// Create a writer for `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write raw bytes to `name`, atomically.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let final_path = self.dir.join(name);
        let tmp_path = self.dir.join(format!("{name}.tmp"));
        fs::write(&tmp_path, bytes)?;
        fs::rename(&tmp_path, &final_path)?;
        log::debug!("wrote {} ({} bytes)", final_path.display(), bytes.len());
        Ok(final_path)
    }

    /// Write a UTF-8 string to `name`, atomically.
    pub fn write_str(&self, name: &str, content: &str) -> Result<PathBuf> {
        self.write_bytes(name, content.as_bytes())
    }

    /// Copy a single file into the output directory, keeping its name.
    pub fn copy_file(&self, source: &Path) -> Result<PathBuf> {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "asset".to_string());
        let dest = self.dir.join(&name);
        fs::copy(source, &dest)?;
        log::debug!("copied {} -> {}", source.display(), dest.display());
        Ok(dest)
    }

    /// Recursively copy a directory into the output directory under the
    /// same name (used for pre-rendered image assets).
    pub fn copy_dir(&self, source: &Path) -> Result<PathBuf> {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "assets".to_string());
        let dest = self.dir.join(&name);
        copy_dir_recursive(source, &dest)?;
        Ok(dest)
    }

    /// Write the `build_info.json` sidecar.
    pub fn write_build_info(&self, info: &BuildInfo) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(info)?;
        self.write_str(BUILD_INFO_FILENAME, &json)
    }
}

fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::content::course_deck;

    #[test]
    fn write_str_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path()).unwrap();
        let path = writer.write_str("index.html", "<html></html>").unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("index.html.tmp").exists());
    }

    #[test]
    fn overwrite_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path()).unwrap();
        writer.write_str("a.txt", "내용").unwrap();
        let path = writer.write_str("a.txt", "내용").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "내용");
    }

    #[test]
    fn copy_dir_copies_nested_files() {
        let src = tempfile::tempdir().unwrap();
        fs::create_dir(src.path().join("images")).unwrap();
        fs::write(src.path().join("images/logo.png"), b"png").unwrap();

        let out = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(out.path()).unwrap();
        writer.copy_dir(&src.path().join("images")).unwrap();
        assert!(out.path().join("images/logo.png").exists());
    }

    #[test]
    fn build_info_sidecar_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path()).unwrap();
        let cfg = BuildConfig::with_timestamp("/p", Some("20250101_0900".into()));
        let deck = course_deck();
        let info = BuildInfo::new(&cfg, &deck, vec!["index.html".into()]);
        let path = writer.write_build_info(&info).unwrap();

        let parsed: BuildInfo =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed.slides_count, 10);
        assert_eq!(parsed.generated_files, vec!["index.html".to_string()]);
    }
}
