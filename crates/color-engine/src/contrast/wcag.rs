//! WCAG 2.x relative luminance and contrast ratio.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// sRGB channel value below which the transfer function is linear.
const LINEAR_THRESHOLD: f64 = 0.03928;

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(color: Color) -> f64 {
    let rgb = color.rgb();
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio in `[1, 21]`. Symmetric in its arguments.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance tier for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA-Large")]
    AaLarge,
    #[serde(rename = "Fail")]
    Fail,
}

impl WcagLevel {
    /// Minimum ratio for this tier (inclusive). `Fail` has none.
    pub fn min_ratio(self) -> Option<f64> {
        match self {
            WcagLevel::Aaa => Some(7.0),
            WcagLevel::Aa => Some(4.5),
            WcagLevel::AaLarge => Some(3.0),
            WcagLevel::Fail => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLarge => "AA-Large",
            WcagLevel::Fail => "Fail",
        }
    }

    /// Display status shown next to the tier.
    pub fn status(self) -> &'static str {
        match self {
            WcagLevel::Aaa => "excellent",
            WcagLevel::Aa => "good",
            WcagLevel::AaLarge => "warning",
            WcagLevel::Fail => "poor",
        }
    }

    pub fn passes(self) -> bool {
        self != WcagLevel::Fail
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Map a contrast ratio to its WCAG tier.
pub fn classify(ratio: f64) -> WcagLevel {
    if ratio >= 7.0 {
        WcagLevel::Aaa
    } else if ratio >= 4.5 {
        WcagLevel::Aa
    } else if ratio >= 3.0 {
        WcagLevel::AaLarge
    } else {
        WcagLevel::Fail
    }
}
