//! XML text escaping for hand-written OOXML parts.

use quick_xml::escape::escape;

/// Escape text for use in XML element content or attribute values.
pub fn escape_xml(text: &str) -> String {
    escape(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_xml("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn korean_passes_through() {
        assert_eq!(escape_xml("한글학교"), "한글학교");
    }
}
