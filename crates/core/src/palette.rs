//! Fixed color palette used across all output formats.
//!
//! These are the Chrome brand colors the course materials are styled with.

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex without a leading `#`, as OOXML wants it.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS hex notation.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const BLUE: Rgb = Rgb::new(66, 133, 244);
pub const RED: Rgb = Rgb::new(234, 67, 53);
pub const YELLOW: Rgb = Rgb::new(251, 188, 5);
pub const GREEN: Rgb = Rgb::new(52, 168, 83);
pub const DARK_GRAY: Rgb = Rgb::new(60, 64, 67);
pub const LIGHT_GRAY: Rgb = Rgb::new(241, 243, 244);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_without_hash() {
        assert_eq!(BLUE.hex(), "4285F4");
        assert_eq!(DARK_GRAY.hex(), "3C4043");
    }

    #[test]
    fn css_is_lowercase_with_hash() {
        assert_eq!(RED.css(), "#ea4335");
    }
}
