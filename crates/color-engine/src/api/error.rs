//! Unified error type for the color-engine public API.

use std::fmt;

use crate::extract::ExtractError;
use crate::palette::{PaletteError, ParseColorError};

/// Unified error type for the color-engine public API.
///
/// Wraps every error type of the crate so application code can use `?`
/// across color parsing, palette assembly and extraction.
///
/// # Example
///
/// ```
/// use color_engine::{assemble, Color, EngineError, Palette, RawPaletteEntry};
///
/// fn brand_palette() -> Result<Palette, EngineError> {
///     let accent: Color = "#FF6B35".parse()?;
///     let palette = assemble(&[RawPaletteEntry::new(accent.hex(), "Coral", "accent")])?;
///     Ok(palette)
/// }
/// # assert_eq!(brand_palette().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed hex color
    InvalidFormat(ParseColorError),
    /// Palette payload failed validation
    InvalidPalette(PaletteError),
    /// Extraction failed or was misused
    Extract(ExtractError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidFormat(err) => write!(f, "invalid color: {}", err),
            EngineError::InvalidPalette(err) => write!(f, "invalid palette: {}", err),
            EngineError::Extract(err) => write!(f, "extraction failed: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidFormat(err) => Some(err),
            EngineError::InvalidPalette(err) => Some(err),
            EngineError::Extract(err) => Some(err),
        }
    }
}

impl From<ParseColorError> for EngineError {
    fn from(err: ParseColorError) -> Self {
        EngineError::InvalidFormat(err)
    }
}

impl From<PaletteError> for EngineError {
    fn from(err: PaletteError) -> Self {
        EngineError::InvalidPalette(err)
    }
}

impl From<ExtractError> for EngineError {
    fn from(err: ExtractError) -> Self {
        EngineError::Extract(err)
    }
}
