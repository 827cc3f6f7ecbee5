//! Domain types for the course content table.
//!
//! A [`Deck`] is the static, ordered description of section titles and
//! bullet text that drives every generator. It is built once per run,
//! never mutated afterwards, and consumed directly by the renderers.

use crate::error::{Error, Result};
use crate::palette::Rgb;
use crate::text::nfc;
use serde::{Deserialize, Serialize};

/// An ordered sequence of sections making up one course deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Course title shown on the landing page and in document properties.
    pub title: String,

    /// Course subtitle.
    pub subtitle: String,

    /// Sections in presentation order. One slide / page per section.
    pub sections: Vec<Section>,
}

impl Deck {
    /// Create an empty deck with the given title and subtitle.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: nfc(&title.into()),
            subtitle: nfc(&subtitle.into()),
            sections: Vec::new(),
        }
    }

    /// Append a section to the deck.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check the deck invariants before rendering.
    ///
    /// Every section must carry a non-empty title and a non-empty id;
    /// renderers rely on this instead of defensively skipping content.
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(Error::InvalidDeck("deck has no sections".into()));
        }
        for (idx, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(Error::InvalidDeck(format!(
                    "section {} has an empty title",
                    idx + 1
                )));
            }
            if section.id.trim().is_empty() {
                return Err(Error::InvalidDeck(format!(
                    "section {} ('{}') has an empty id",
                    idx + 1,
                    section.title
                )));
            }
        }
        Ok(())
    }
}

/// What role a section plays in the deck. Controls slide layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    /// Opening slide: large centered title, subtitle, date line.
    Title,
    /// Regular content slide: title, lead line, bullets.
    Content,
    /// Closing slide: content plus a closing message.
    Contact,
}

/// A single course section (one slide, one HTML page).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier; drives the per-section HTML filename.
    pub id: String,

    /// Section title. Must be non-empty (see [`Deck::validate`]).
    pub title: String,

    /// Short description shown on the landing-page card.
    pub description: String,

    /// Layout role.
    pub kind: SectionKind,

    /// Accent color for the title and card.
    pub accent: Rgb,

    /// Ordered body items.
    pub body: Vec<BodyItem>,
}

impl Section {
    /// Create a section with no body items.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: SectionKind,
        accent: Rgb,
    ) -> Self {
        Self {
            id: id.into(),
            title: nfc(&title.into()),
            description: nfc(&description.into()),
            kind,
            accent,
            body: Vec::new(),
        }
    }

    /// Append a plain bullet item.
    pub fn bullet(mut self, text: impl Into<String>) -> Self {
        self.body.push(BodyItem::Bullet(nfc(&text.into())));
        self
    }

    /// Append a lead line (paragraph shown above the bullets).
    pub fn lead(mut self, text: impl Into<String>) -> Self {
        self.body.push(BodyItem::Lead(nfc(&text.into())));
        self
    }

    /// Append a key-value group.
    pub fn group(mut self, heading: impl Into<String>, items: &[&str]) -> Self {
        self.body.push(BodyItem::Group {
            heading: nfc(&heading.into()),
            items: items.iter().map(|s| nfc(s)).collect(),
        });
        self
    }

    /// The filename of this section's HTML page.
    pub fn page_filename(&self) -> String {
        format!("{}.html", self.id)
    }

    /// All bullet-level lines, flattened (group items included).
    pub fn bullet_lines(&self) -> Vec<&str> {
        let mut lines = Vec::new();
        for item in &self.body {
            match item {
                BodyItem::Bullet(text) => lines.push(text.as_str()),
                BodyItem::Group { items, .. } => {
                    lines.extend(items.iter().map(String::as_str))
                }
                BodyItem::Lead(_) => {}
            }
        }
        lines
    }
}

/// One entry in a section body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BodyItem {
    /// A lead paragraph above the bullet list.
    Lead(String),
    /// A plain bullet line.
    Bullet(String),
    /// A nested group: heading plus its own bullet items.
    Group { heading: String, items: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    fn section(title: &str) -> Section {
        Section::new("s1", title, "desc", SectionKind::Content, palette::BLUE)
    }

    #[test]
    fn validate_rejects_empty_title() {
        let mut deck = Deck::new("t", "s");
        deck.add_section(section("  "));
        assert!(matches!(deck.validate(), Err(Error::InvalidDeck(_))));
    }

    #[test]
    fn validate_rejects_empty_deck() {
        let deck = Deck::new("t", "s");
        assert!(deck.validate().is_err());
    }

    #[test]
    fn bullet_lines_flatten_groups() {
        let s = section("제목")
            .lead("핵심 기능")
            .bullet("하나")
            .group("묶음", &["둘", "셋"]);
        assert_eq!(s.bullet_lines(), vec!["하나", "둘", "셋"]);
    }

    #[test]
    fn page_filename_uses_id() {
        assert_eq!(section("t").page_filename(), "s1.html");
    }
}
