//! Text handling for Korean course content.
//!
//! All content strings are normalized to NFC so that composed Hangul
//! syllables survive every output format byte-for-byte, and the markdown
//! heading splitter backs both the built-in PDF renderer and the tests.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Regex matching an ATX markdown heading line.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*$").unwrap());

/// Normalize a string to NFC, avoiding allocation when already normalized.
pub fn nfc(text: &str) -> String {
    if is_nfc(text) {
        text.to_string()
    } else {
        text.nfc().collect()
    }
}

/// A markdown line classified for simple line-oriented layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownLine<'a> {
    /// A heading with its level (1-6) and text.
    Heading(usize, &'a str),
    /// A bullet list item.
    Bullet(&'a str),
    /// Any other non-blank line.
    Paragraph(&'a str),
    /// A blank line.
    Blank,
}

/// Classify each line of a markdown document.
///
/// This is deliberately not a full markdown parser; the built-in PDF
/// renderer only distinguishes headings, bullets, and plain paragraphs.
pub fn classify_lines(markdown: &str) -> Vec<MarkdownLine<'_>> {
    markdown
        .lines()
        .map(|line| {
            let trimmed = line.trim_end();
            if trimmed.trim().is_empty() {
                MarkdownLine::Blank
            } else if let Some(caps) = HEADING_REGEX.captures(trimmed) {
                let level = caps.get(1).map(|m| m.as_str().len()).unwrap_or(1);
                let text = caps.get(2).map(|m| m.as_str()).unwrap_or("");
                MarkdownLine::Heading(level, text)
            } else if let Some(rest) = trimmed
                .trim_start()
                .strip_prefix("- ")
                .or_else(|| trimmed.trim_start().strip_prefix("* "))
            {
                MarkdownLine::Bullet(rest)
            } else {
                MarkdownLine::Paragraph(trimmed)
            }
        })
        .collect()
}

/// Extract the heading texts of a markdown document, in order.
pub fn headings(markdown: &str) -> Vec<&str> {
    classify_lines(markdown)
        .into_iter()
        .filter_map(|line| match line {
            MarkdownLine::Heading(_, text) => Some(text),
            _ => None,
        })
        .collect()
}

/// Wrap a line at roughly `max_chars` characters, breaking at spaces when
/// possible. CJK text has few spaces, so a hard character break is the
/// fallback.
pub fn wrap_line(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + max_chars).min(chars.len());
        let mut split = end;
        if end < chars.len() {
            // Prefer the last space inside the window.
            if let Some(pos) = (start..end).rev().find(|&i| chars[i] == ' ') {
                if pos > start {
                    split = pos;
                }
            }
        }
        let line: String = chars[start..split].iter().collect();
        lines.push(line.trim().to_string());
        start = if split == end { split } else { split + 1 };
    }
    lines.retain(|l| !l.is_empty());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfc_preserves_composed_hangul() {
        let composed = "한글학교";
        assert_eq!(nfc(composed), composed);
    }

    #[test]
    fn nfc_composes_decomposed_jamo() {
        // "한" as initial + vowel + final jamo
        let decomposed = "\u{1112}\u{1161}\u{11AB}";
        assert_eq!(nfc(decomposed), "한");
    }

    #[test]
    fn headings_are_extracted_in_order() {
        let md = "# 첫째\n\n본문\n\n## 둘째\n- 항목\n### 셋째\n";
        assert_eq!(headings(md), vec!["첫째", "둘째", "셋째"]);
    }

    #[test]
    fn classify_detects_bullets() {
        let lines = classify_lines("- 하나\n* 둘\n");
        assert_eq!(lines[0], MarkdownLine::Bullet("하나"));
        assert_eq!(lines[1], MarkdownLine::Bullet("둘"));
    }

    #[test]
    fn wrap_line_breaks_long_cjk_text() {
        let text = "가".repeat(25);
        let wrapped = wrap_line(&text, 10);
        assert_eq!(wrapped.len(), 3);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn wrap_line_prefers_spaces() {
        let wrapped = wrap_line("one two three four five", 10);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(wrapped.join(" "), "one two three four five");
    }
}
