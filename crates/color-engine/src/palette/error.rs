//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when a hex color string is not an optional `#` followed by
/// exactly six hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 6 digits after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 6 digits)")
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "invalid hex character: {c:?}")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// What is wrong with a single palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The color field is not a valid hex color
    InvalidColor(ParseColorError),
    /// The role is not one of `primary`, `secondary`, `accent`
    UnknownRole(String),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::InvalidColor(err) => write!(f, "{err}"),
            EntryError::UnknownRole(role) => write!(
                f,
                "unknown role {role:?} (expected primary, secondary or accent)"
            ),
        }
    }
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The entry at `index` failed validation
    InvalidEntry {
        /// Position of the offending entry in the input
        index: usize,
        /// Why it was rejected
        reason: EntryError,
    },
    /// The operation needs at least one entry
    Empty,
}

impl PaletteError {
    /// Index of the offending entry, if the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            PaletteError::InvalidEntry { index, .. } => Some(*index),
            PaletteError::Empty => None,
        }
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidEntry { index, reason } => {
                write!(f, "invalid palette entry at index {index}: {reason}")
            }
            PaletteError::Empty => write!(f, "palette cannot be empty"),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::InvalidEntry {
                reason: EntryError::InvalidColor(err),
                ..
            } => Some(err),
            _ => None,
        }
    }
}
