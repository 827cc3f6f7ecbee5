//! Korean font discovery for the built-in renderer.

use std::path::{Path, PathBuf};

/// Candidate font files, tried in order. `.ttc` collections are listed
/// for visibility but skipped: the PDF writer embeds single-face fonts
/// only.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansKR-Regular.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJKkr-Regular.otf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Find the first usable font file on this system, skipping collections.
pub fn find_font() -> Option<PathBuf> {
    FONT_CANDIDATES
        .iter()
        .map(Path::new)
        .filter(|p| !matches!(p.extension().and_then(|e| e.to_str()), Some("ttc")))
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_are_never_selected() {
        if let Some(font) = find_font() {
            assert_ne!(font.extension().and_then(|e| e.to_str()), Some("ttc"));
        }
    }
}
