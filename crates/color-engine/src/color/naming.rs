//! Human-readable color names.
//!
//! Low-saturation colors get a grayscale name picked by lightness. Everything
//! else is named by hue through an ordered table of lower bounds; a hue that
//! sits exactly on a bound belongs to the higher range.

use super::hsl::HslFractions;
use super::Color;

/// Saturation below this fraction is treated as grayscale.
pub const GRAYSCALE_SATURATION: f64 = 0.2;

/// Grayscale names by exclusive upper lightness bound; the last entry catches
/// everything else.
const GRAYSCALE_NAMES: [(f64, &str); 3] = [
    (0.3, "Charcoal"),
    (0.6, "Gray"),
    (f64::INFINITY, "Light Gray"),
];

/// Hue names by inclusive lower bound in degrees, checked highest first.
const HUE_NAMES: [(u16, &str); 10] = [
    (345, "Red"),
    (315, "Pink"),
    (285, "Magenta"),
    (255, "Purple"),
    (195, "Blue"),
    (135, "Cyan"),
    (75, "Green"),
    (45, "Yellow"),
    (15, "Orange"),
    (0, "Red"),
];

/// Every name [`color_name`] can return.
pub const COLOR_NAMES: [&str; 12] = [
    "Charcoal",
    "Gray",
    "Light Gray",
    "Red",
    "Orange",
    "Yellow",
    "Green",
    "Cyan",
    "Blue",
    "Purple",
    "Magenta",
    "Pink",
];

/// Name a color.
///
/// Hue is rounded to whole degrees before the table lookup; saturation and
/// lightness are compared unrounded.
///
/// ```
/// use color_engine::{color_name, Color};
///
/// assert_eq!(color_name(Color::new(0x33, 0x66, 0x99)), "Blue");
/// assert_eq!(color_name(Color::new(40, 40, 40)), "Charcoal");
/// ```
pub fn color_name(color: Color) -> &'static str {
    let rgb = color.rgb();
    let hsl = HslFractions::from_rgb(rgb.r, rgb.g, rgb.b);

    if hsl.saturation < GRAYSCALE_SATURATION {
        return GRAYSCALE_NAMES
            .iter()
            .find(|(upper, _)| hsl.lightness < *upper)
            .map_or("Light Gray", |(_, name)| name);
    }

    hue_name(hsl.hue_degrees())
}

/// Name a whole-degree hue (0..=359).
pub fn hue_name(hue: u16) -> &'static str {
    HUE_NAMES
        .iter()
        .find(|(lower, _)| hue >= *lower)
        .map_or("Red", |(_, name)| name)
}
