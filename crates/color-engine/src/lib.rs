//! color-engine: color math for palette tools
//!
//! This library converts between hex, RGB and HSL, names colors, measures
//! WCAG contrast, extracts dominant colors from decoded images and validates
//! palette payloads. It is pure and synchronous; image decoding, I/O and
//! networking belong to the caller.
//!
//! # Quick Start
//!
//! ```
//! use color_engine::{build_report, Color, DominantColorExtractor, ExtractOptions, Palette, PixelBuffer};
//!
//! // A 4x4 image of a single color
//! let data = [0x76, 0x4B, 0xA2, 0xFF].repeat(16);
//! let buffer = PixelBuffer::new(&data, 4, 4).unwrap();
//!
//! let mut extractor = DominantColorExtractor::new(ExtractOptions::default());
//! let extraction = extractor.extract(&buffer).unwrap();
//! let palette = Palette::from_extraction(extraction.colors);
//!
//! assert_eq!(palette.len(), 1);
//! assert_eq!(palette.entries()[0].name, "Purple");
//!
//! let report = build_report(&palette);
//! assert_eq!(report[0].foreground, Color::WHITE);
//! ```
//!
//! # Palettes from external payloads
//!
//! Generators and clients send loose `{color, name, type}` objects. They
//! only become a [`Palette`] through [`assemble`], which reports the index of
//! the first bad entry:
//!
//! ```
//! use color_engine::{assemble, RawPaletteEntry, Role};
//!
//! let palette = assemble(&[
//!     RawPaletteEntry::new("#FF6B35", "Coral Orange", "primary"),
//!     RawPaletteEntry::new("#4ECDC4", "Turquoise", "Secondary"),
//! ])
//! .unwrap();
//! assert_eq!(palette.entries()[1].role, Role::Secondary);
//! ```
//!
//! # Contrast
//!
//! Relative luminance and contrast ratios follow WCAG 2.x. The tiers are
//! inclusive lower bounds: AAA from 7.0, AA from 4.5, AA-Large from 3.0.
//!
//! ```
//! use color_engine::{classify, contrast_ratio, Color, WcagLevel};
//!
//! let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
//! assert!((ratio - 21.0).abs() < 1e-6);
//! assert_eq!(classify(4.5), WcagLevel::Aa);
//! ```

pub mod api;
pub mod color;
pub mod contrast;
pub mod extract;
pub mod palette;


pub use api::EngineError;
pub use color::{color_name, hex_to_rgb, rgb_to_hex, rgb_to_hsl, Color, Hsl, Rgb};
pub use contrast::{
    build_report, build_report_with_limit, classify, contrast_ratio, relative_luminance,
    ContrastCheck, WcagLevel, DEFAULT_REPORT_LIMIT,
};
pub use extract::{
    extract_dominant_colors, DominantColor, DominantColorExtractor, ExtractError, ExtractOptions,
    Extraction, ExtractionStage, PixelBuffer,
};
pub use palette::{
    assemble, EntryError, Palette, PaletteEntry, PaletteError, ParseColorError, RawPaletteEntry,
    Role,
};
