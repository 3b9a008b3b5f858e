//! Palette types and utilities
//!
//! This module provides the palette model, the assembler that validates
//! loose `{color, name, type}` payloads, and the error types for parsing and
//! validation.

mod error;
mod palette;

pub use error::{EntryError, PaletteError, ParseColorError};
pub use palette::{assemble, Palette, PaletteEntry, RawPaletteEntry, Role};
