//! HSL conversion.
//!
//! Uses the CSS Color Module formula: hue from the maximal channel and the
//! max/min delta, lightness as the max/min midpoint, saturation relative to
//! the lightness.

use serde::{Deserialize, Serialize};

/// Hue in whole degrees (0..=359), saturation and lightness in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Unrounded HSL components: hue in degrees (0.0..360.0), saturation and
/// lightness as fractions (0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HslFractions {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslFractions {
    pub(crate) fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let (rn, gn, bn) = (norm(r), norm(g), norm(b));
        let (max_n, min_n) = (norm(max), norm(min));
        let lightness = (max_n + min_n) / 2.0;

        // Pure gray: hue and saturation are both zero.
        if max == min {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let delta = max_n - min_n;
        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

        let sextant = if max == r {
            (gn - bn) / delta
        } else if max == g {
            (bn - rn) / delta + 2.0
        } else {
            (rn - gn) / delta + 4.0
        };

        let mut hue = sextant * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Hue rounded to whole degrees and reduced into 0..=359.
    pub(crate) fn hue_degrees(&self) -> u16 {
        (self.hue.round() as u16) % 360
    }
}

#[inline]
fn norm(c: u8) -> f64 {
    c as f64 / 255.0
}

/// Convert an RGB triple to rounded HSL.
///
/// ```
/// use color_engine::color::rgb_to_hsl;
///
/// let hsl = rgb_to_hsl(255, 0, 0);
/// assert_eq!((hsl.h, hsl.s, hsl.l), (0, 100, 50));
/// ```
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let f = HslFractions::from_rgb(r, g, b);
    Hsl {
        h: f.hue_degrees(),
        s: (f.saturation * 100.0).round() as u8,
        l: (f.lightness * 100.0).round() as u8,
    }
}
