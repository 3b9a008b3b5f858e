//! Dominant color extraction from raw pixel data.
//!
//! The caller decodes the image (that is outside this crate) and hands the
//! RGBA bytes over as a [`PixelBuffer`]. [`DominantColorExtractor`] turns
//! them into a ranked list of named [`DominantColor`]s, and
//! [`Palette::from_extraction`](crate::Palette::from_extraction) tags them
//! with roles.

mod buffer;
mod error;
mod extractor;
mod options;

pub use buffer::PixelBuffer;
pub use error::ExtractError;
pub use extractor::{
    extract_dominant_colors, DominantColor, DominantColorExtractor, Extraction, ExtractionStage,
};
pub use options::ExtractOptions;
