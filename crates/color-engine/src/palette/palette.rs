//! Palette entries, roles and the palette assembler.
//!
//! A [`Palette`] is only ever built from validated input: either typed
//! [`PaletteEntry`] values, a loose [`RawPaletteEntry`] payload that passes
//! [`assemble`], or extraction results via [`Palette::from_extraction`].
//! Deserializing a `Palette` runs the same validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{EntryError, PaletteError};
use crate::color::Color;
use crate::extract::DominantColor;

/// Intended usage weight of a palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Accent,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Primary, Role::Secondary, Role::Accent];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
        }
    }

    /// Positional role for the n-th ranked extracted color: two primaries,
    /// two secondaries, accents after that.
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            0 | 1 => Role::Primary,
            2 | 3 => Role::Secondary,
            _ => Role::Accent,
        }
    }

    /// Whether entries with this role are used as backgrounds in the
    /// accessibility report.
    pub fn is_background(self) -> bool {
        matches!(self, Role::Primary | Role::Secondary)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = EntryError;

    /// Parse a role tag. Matching ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EntryError::UnknownRole(s.to_string()))
    }
}

/// A validated palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: Color,
    pub name: String,
    #[serde(rename = "type")]
    pub role: Role,
}

impl PaletteEntry {
    pub fn new(color: Color, name: impl Into<String>, role: Role) -> Self {
        Self {
            color,
            name: name.into(),
            role,
        }
    }
}

/// An unvalidated `{color, name, type}` entry as produced by generators,
/// clients and export files.
///
/// Missing fields deserialize as empty strings so that [`assemble`] can
/// report which entry is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPaletteEntry {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub role: String,
}

impl RawPaletteEntry {
    pub fn new(
        color: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            color: color.into(),
            name: name.into(),
            role: role.into(),
        }
    }

    fn validate(&self, index: usize) -> Result<PaletteEntry, PaletteError> {
        let invalid = |reason| PaletteError::InvalidEntry { index, reason };

        let color = Color::from_hex(&self.color)
            .map_err(|e| invalid(EntryError::InvalidColor(e)))?;
        let role = self.role.parse::<Role>().map_err(invalid)?;

        Ok(PaletteEntry::new(color, self.name.clone(), role))
    }
}

impl From<&PaletteEntry> for RawPaletteEntry {
    fn from(entry: &PaletteEntry) -> Self {
        Self::new(entry.color.hex(), entry.name.clone(), entry.role.as_str())
    }
}

/// Validate a loose payload into a [`Palette`].
///
/// Entries keep their input order. The first invalid entry aborts assembly.
///
/// # Errors
///
/// [`PaletteError::InvalidEntry`] naming the index of the first entry whose
/// color does not parse or whose role is not recognized.
///
/// # Example
///
/// ```
/// use color_engine::{assemble, PaletteError, RawPaletteEntry};
///
/// let raw = [
///     RawPaletteEntry::new("#FF6B35", "Coral Orange", "primary"),
///     RawPaletteEntry::new("#4ECDC4", "Turquoise", "highlight"),
/// ];
/// let err = assemble(&raw).unwrap_err();
/// assert_eq!(err.index(), Some(1));
/// ```
pub fn assemble(raw: &[RawPaletteEntry]) -> Result<Palette, PaletteError> {
    raw.iter()
        .enumerate()
        .map(|(index, entry)| entry.validate(index))
        .collect::<Result<Vec<_>, _>>()
        .map(Palette::new)
}

/// An ordered sequence of palette entries.
///
/// Order is display order. Palettes are never patched in place; producing a
/// new palette replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RawPaletteEntry>", into = "Vec<RawPaletteEntry>")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Build a palette from ranked extraction results.
    ///
    /// Each color keeps its generated name; roles are assigned by rank with
    /// [`Role::for_rank`].
    pub fn from_extraction(colors: Vec<DominantColor>) -> Self {
        let entries = colors
            .into_iter()
            .enumerate()
            .map(|(rank, dominant)| {
                PaletteEntry::new(dominant.color, dominant.name, Role::for_rank(rank))
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Colors in palette order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().map(|e| e.color)
    }

    /// Entries with the given role, in palette order.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &PaletteEntry> + '_ {
        self.entries.iter().filter(move |e| e.role == role)
    }

    /// Loose representation suitable for serialization.
    pub fn to_raw(&self) -> Vec<RawPaletteEntry> {
        self.entries.iter().map(RawPaletteEntry::from).collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl TryFrom<Vec<RawPaletteEntry>> for Palette {
    type Error = PaletteError;

    fn try_from(raw: Vec<RawPaletteEntry>) -> Result<Self, Self::Error> {
        assemble(&raw)
    }
}

impl From<Palette> for Vec<RawPaletteEntry> {
    fn from(palette: Palette) -> Self {
        palette.to_raw()
    }
}
