//! RGB colour values and the deck palette.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB colour.
///
/// # Examples
///
/// ```rust
/// use deckhand::common::RGBColor;
///
/// let slate = RGBColor::from_hex("#1F2937").unwrap();
/// assert_eq!(slate.to_hex(), "1F2937");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Hex string without `#`, the form `a:srgbClr` expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Fixed colours used by the assembler.
pub mod palette {
    use super::RGBColor;

    /// Cover slide background.
    pub const COVER_BACKGROUND: RGBColor = RGBColor::new(0xE8, 0xEC, 0xF1);
    /// Content slide background.
    pub const CONTENT_BACKGROUND: RGBColor = RGBColor::new(0xFF, 0xFF, 0xFF);
    /// Headings on every slide.
    pub const HEADING: RGBColor = RGBColor::new(0x1F, 0x29, 0x37);
    /// Body text.
    pub const BODY: RGBColor = RGBColor::new(0x37, 0x41, 0x51);
    /// Secondary text such as captions.
    pub const MUTED: RGBColor = RGBColor::new(0x6B, 0x72, 0x80);
    /// Fill of the missing-illustration placeholder.
    pub const PLACEHOLDER_FILL: RGBColor = RGBColor::new(0xD1, 0xD5, 0xDB);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = RGBColor::new(255, 128, 0);
        assert_eq!(color.to_hex(), "FF8000");
        assert_eq!(RGBColor::from_hex("#ff8000"), Some(color));
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(RGBColor::from_hex("FFF"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("ÄÄ00"), None);
    }

    #[test]
    fn test_cover_differs_from_content() {
        assert_ne!(palette::COVER_BACKGROUND, palette::CONTENT_BACKGROUND);
    }
}
