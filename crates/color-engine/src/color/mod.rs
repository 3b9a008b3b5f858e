//! Color types and conversion utilities
//!
//! [`Color`] is the value type passed around the engine. It is built from an
//! RGB triple or parsed from a hex string; the hex and HSL views are derived
//! from the triple and cannot drift apart.
//!
//! # Example
//!
//! ```
//! use color_engine::color::{hex_to_rgb, rgb_to_hex, rgb_to_hsl};
//!
//! let rgb = hex_to_rgb("#ff6b35").unwrap();
//! assert_eq!(rgb_to_hex(rgb.r.into(), rgb.g.into(), rgb.b.into()), "#FF6B35");
//!
//! let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
//! assert_eq!(hsl.h, 16);
//! ```

mod hsl;
mod naming;
mod rgb;

pub use hsl::{rgb_to_hsl, Hsl};
pub use naming::{color_name, hue_name, COLOR_NAMES, GRAYSCALE_SATURATION};
pub use rgb::{hex_to_rgb, rgb_to_hex, Color, Rgb};
