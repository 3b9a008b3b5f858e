//! RGB triples, the canonical [`Color`] value and hex conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::hsl::{rgb_to_hsl, Hsl};
use crate::palette::ParseColorError;

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three channels (0..=765).
    #[inline]
    pub fn channel_sum(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

/// Parse a hex color into its RGB triple.
///
/// Accepts an optional leading `#` followed by exactly six hex digits,
/// case-insensitive. Anything else yields `None`.
///
/// ```
/// use color_engine::color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#336699"), Some(Rgb::new(0x33, 0x66, 0x99)));
/// assert_eq!(hex_to_rgb("abcdef"), Some(Rgb::new(0xAB, 0xCD, 0xEF)));
/// assert_eq!(hex_to_rgb("#FFF"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    parse_hex(hex).ok()
}

/// Format an RGB triple as `#RRGGBB`.
///
/// Channels are clamped to `0..=255` first, so out-of-range arithmetic
/// results still produce a valid color.
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    let clamp = |c: i32| c.clamp(0, 255) as u8;
    format!("#{:02X}{:02X}{:02X}", clamp(r), clamp(g), clamp(b))
}

fn parse_hex(hex: &str) -> Result<Rgb, ParseColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 {
        return Err(ParseColorError::InvalidLength);
    }
    // from_str_radix tolerates a leading '+', so check the digits ourselves.
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex(bad));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError::InvalidLength)
    };
    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// An immutable color value.
///
/// Only the RGB triple is stored; the hex string and HSL triple are derived
/// on demand, so the three representations always agree.
///
/// Serializes as the canonical uppercase `"#RRGGBB"` string.
///
/// # Example
///
/// ```
/// use color_engine::Color;
///
/// let color: Color = "#336699".parse().unwrap();
/// assert_eq!(color.hex(), "#336699");
/// assert_eq!(color.hsl().h, 210);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    rgb: Rgb,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
        }
    }

    #[inline]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self { rgb }
    }

    /// Parse a `#RRGGBB` / `RRGGBB` string.
    ///
    /// # Errors
    ///
    /// [`ParseColorError::InvalidLength`] when there are not exactly six
    /// digits, [`ParseColorError::InvalidHex`] on a non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        parse_hex(hex).map(Self::from_rgb)
    }

    #[inline]
    pub fn rgb(self) -> Rgb {
        self.rgb
    }

    /// Canonical uppercase `#RRGGBB` form.
    pub fn hex(self) -> String {
        rgb_to_hex(self.rgb.r.into(), self.rgb.g.into(), self.rgb.b.into())
    }

    pub fn hsl(self) -> Hsl {
        rgb_to_hsl(self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// CSS functional notation, e.g. `rgb(51, 102, 153)`.
    pub fn css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// CSS functional notation, e.g. `hsl(210, 50%, 40%)`.
    pub fn css_hsl(self) -> String {
        let Hsl { h, s, l } = self.hsl();
        format!("hsl({h}, {s}%, {l}%)")
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_accepts_optional_hash() {
        assert_eq!(hex_to_rgb("#FF8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(hex_to_rgb("FF8000"), Some(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn test_hex_to_rgb_case_insensitive() {
        assert_eq!(hex_to_rgb("#abcdef"), hex_to_rgb("#ABCDEF"));
        assert_eq!(hex_to_rgb("#AbCdEf"), hex_to_rgb("#ABCDEF"));
    }

    #[test]
    fn test_hex_to_rgb_rejects_bad_input() {
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#"), None);
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#FFFFFFF"), None);
        assert_eq!(hex_to_rgb("#GG0000"), None);
        assert_eq!(hex_to_rgb("+F0000"), None);
        assert_eq!(hex_to_rgb(" #FFFFFF"), None);
        assert_eq!(hex_to_rgb("##FFFFFF"), None);
        // Six bytes, but not six ASCII digits
        assert_eq!(hex_to_rgb("ééé"), None);
    }

    #[test]
    fn test_from_hex_error_kinds() {
        assert_eq!(Color::from_hex("#FFFF"), Err(ParseColorError::InvalidLength));
        assert_eq!(
            Color::from_hex("#12345Z"),
            Err(ParseColorError::InvalidHex('Z'))
        );
    }

    #[test]
    fn test_rgb_to_hex_pads_and_uppercases() {
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(10, 171, 255), "#0AABFF");
    }

    #[test]
    fn test_rgb_to_hex_clamps() {
        assert_eq!(rgb_to_hex(-20, 300, 128), "#00FF80");
    }

    #[test]
    fn test_hex_round_trip_normalizes_case() {
        for hex in ["#000000", "#ffffff", "#336699", "#0aBc9F", "#7f7f7f"] {
            let rgb = hex_to_rgb(hex).unwrap();
            let back = rgb_to_hex(rgb.r.into(), rgb.g.into(), rgb.b.into());
            assert_eq!(back, hex.to_uppercase());
        }
    }

    #[test]
    fn test_css_formats() {
        let color = Color::new(51, 102, 153);
        assert_eq!(color.css_rgb(), "rgb(51, 102, 153)");
        assert_eq!(color.css_hsl(), "hsl(210, 50%, 40%)");
    }

    #[test]
    fn test_color_serde_uses_uppercase_hex() {
        let color: Color = "#a1b2c3".parse().unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#A1B2C3\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);

        assert!(serde_json::from_str::<Color>("\"not a color\"").is_err());
    }
}
