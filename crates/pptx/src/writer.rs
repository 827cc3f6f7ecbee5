//! PPTX package assembly.

use crate::package;
use crate::slide::render_slide;
use coursegen_core::{Deck, Error, Result};
use std::io::{Cursor, Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writer producing a `.pptx` package from a [`Deck`].
#[derive(Debug, Clone)]
pub struct PptxWriter {
    /// ISO timestamp recorded in the document properties.
    created_iso: String,
    /// Human-readable date line shown on the title slide.
    date_line: String,
}

impl PptxWriter {
    pub fn new(created_iso: impl Into<String>, date_line: impl Into<String>) -> Self {
        Self {
            created_iso: created_iso.into(),
            date_line: date_line.into(),
        }
    }

    /// Serialize the deck into an in-memory PPTX package.
    pub fn write_to_vec(&self, deck: &Deck) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.write(deck, &mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Serialize the deck as a PPTX package into `writer`.
    ///
    /// One slide per section, in deck order. The deck is validated first
    /// so malformed content fails before any bytes are produced.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<()> {
        deck.validate()?;

        let slide_count = deck.sections.len();
        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut put = |zip: &mut ZipWriter<W>, name: &str, content: &str| -> Result<()> {
            zip.start_file(name, options)
                .map_err(|e| Error::Zip(format!("failed to start '{name}': {e}")))?;
            zip.write_all(content.as_bytes())?;
            Ok(())
        };

        put(&mut zip, package::CONTENT_TYPES_PATH, &package::content_types(slide_count))?;
        put(&mut zip, package::ROOT_RELS_PATH, &package::root_rels())?;
        put(&mut zip, package::PRESENTATION_PATH, &package::presentation(slide_count))?;
        put(
            &mut zip,
            package::PRESENTATION_RELS_PATH,
            &package::presentation_rels(slide_count),
        )?;
        put(&mut zip, package::SLIDE_MASTER_PATH, &package::slide_master())?;
        put(&mut zip, package::SLIDE_MASTER_RELS_PATH, &package::slide_master_rels())?;
        put(&mut zip, package::SLIDE_LAYOUT_PATH, &package::slide_layout())?;
        put(&mut zip, package::SLIDE_LAYOUT_RELS_PATH, &package::slide_layout_rels())?;
        put(&mut zip, package::THEME_PATH, &package::theme())?;
        put(
            &mut zip,
            package::CORE_PROPS_PATH,
            &package::core_props(&deck.title, &self.created_iso),
        )?;
        put(&mut zip, package::APP_PROPS_PATH, &package::app_props(slide_count))?;

        for (idx, section) in deck.sections.iter().enumerate() {
            let number = idx + 1;
            log::debug!("rendering slide {number}: {}", section.title);
            put(
                &mut zip,
                &package::slide_path(number),
                &render_slide(section, &self.date_line),
            )?;
            put(&mut zip, &package::slide_rels_path(number), &package::slide_rels())?;
        }

        zip.finish()
            .map_err(|e| Error::Zip(format!("failed to finish package: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_core::content::course_deck;
    use std::io::Read;
    use zip::ZipArchive;

    fn writer() -> PptxWriter {
        PptxWriter::new("2025-01-01T09:00:00+09:00", "2025년 01월 01일")
    }

    fn section_count_in(bytes: &[u8]) -> usize {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .filter(|&i| {
                let name = archive.by_index(i).unwrap().name().to_string();
                name.starts_with("ppt/slides/slide") && name.ends_with(".xml")
                    && !name.contains("_rels")
            })
            .count()
    }

    #[test]
    fn slide_count_matches_section_count() {
        let deck = course_deck();
        let bytes = writer().write_to_vec(&deck).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(section_count_in(&bytes), deck.sections.len());
    }

    #[test]
    fn package_is_a_zip_with_content_types() {
        let deck = course_deck();
        let bytes = writer().write_to_vec(&deck).unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("[Content_Types].xml").is_ok());
        assert!(archive.by_name("ppt/presentation.xml").is_ok());
    }

    #[test]
    fn first_slide_keeps_korean_title_bytes() {
        let deck = course_deck();
        let bytes = writer().write_to_vec(&deck).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        assert!(xml.contains("수업을 쉽게, 자료를 예쁘게, 협업을 효율적으로"));
    }

    #[test]
    fn same_deck_and_timestamp_give_identical_bytes() {
        let deck = course_deck();
        let first = writer().write_to_vec(&deck).unwrap();
        let second = writer().write_to_vec(&deck).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_deck_is_rejected_before_writing() {
        let deck = Deck::new("t", "s");
        assert!(writer().write_to_vec(&deck).is_err());
    }
}
