//! Contrast analysis and accessibility reports.
//!
//! A report pairs every background-capable palette entry (primary and
//! secondary) with a set of foreground candidates (pure white, pure black,
//! then every palette color) and keeps the highest-contrast pairs.

mod wcag;

pub use wcag::{classify, contrast_ratio, relative_luminance, WcagLevel};

use serde::Serialize;

use crate::color::Color;
use crate::palette::{Palette, PaletteEntry};

/// Number of checks kept by [`build_report`].
pub const DEFAULT_REPORT_LIMIT: usize = 6;

/// One background/foreground pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastCheck {
    pub background: PaletteEntry,
    pub foreground: Color,
    pub ratio: f64,
    pub level: WcagLevel,
}

impl ContrastCheck {
    pub fn new(background: PaletteEntry, foreground: Color) -> Self {
        let ratio = contrast_ratio(background.color, foreground);
        Self {
            background,
            foreground,
            ratio,
            level: classify(ratio),
        }
    }

    /// Ratio rounded to two decimals, for display.
    pub fn rounded_ratio(&self) -> f64 {
        (self.ratio * 100.0).round() / 100.0
    }
}

/// Report with the default limit of six checks.
pub fn build_report(palette: &Palette) -> Vec<ContrastCheck> {
    build_report_with_limit(palette, DEFAULT_REPORT_LIMIT)
}

/// Highest-contrast pairings, best first, at most `limit` of them.
///
/// Candidates equal in value to the background are skipped. Equal ratios
/// keep generation order (background order, then candidate order).
pub fn build_report_with_limit(palette: &Palette, limit: usize) -> Vec<ContrastCheck> {
    let candidates: Vec<Color> = [Color::WHITE, Color::BLACK]
        .into_iter()
        .chain(palette.colors())
        .collect();

    let mut checks: Vec<ContrastCheck> = palette
        .iter()
        .filter(|entry| entry.role.is_background())
        .flat_map(|background| {
            candidates
                .iter()
                .filter(move |&&fg| fg != background.color)
                .map(move |&fg| ContrastCheck::new(background.clone(), fg))
        })
        .collect();

    checks.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    checks.truncate(limit);
    checks
}
