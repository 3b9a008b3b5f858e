use chrono::{DateTime, SecondsFormat, Utc};
use color_engine::{assemble, Palette, PaletteError, RawPaletteEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// File name suggested for downloaded exports
pub const EXPORT_FILE_NAME: &str = "chromagen-palette.json";

/// Title used when sharing a palette
pub const SHARE_TITLE: &str = "My ChromaGen Color Palette";

const SHARE_INTRO: &str = "Check out this beautiful color palette I generated with ChromaGen:";

/// Error reading or writing an export document
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No palette to export: {0}")]
    InvalidPalette(#[from] PaletteError),

    #[error("Invalid export document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exported palette file: `{"palette": [...], "exported": "<ISO-8601>"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub palette: Palette,
    #[serde(with = "millis")]
    pub exported: DateTime<Utc>,
}

impl ExportDocument {
    /// Stamp a palette with the current time
    pub fn new(palette: Palette) -> Result<Self, ExportError> {
        Self::at(palette, Utc::now())
    }

    /// Stamp a palette with a given time
    pub fn at(palette: Palette, exported: DateTime<Utc>) -> Result<Self, ExportError> {
        if palette.is_empty() {
            return Err(PaletteError::Empty.into());
        }
        Ok(Self { palette, exported })
    }

    /// Two-space indented JSON
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an export file; the palette is re-validated
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let raw: RawExportDocument = serde_json::from_str(json)?;
        Self::at(assemble(&raw.palette)?, raw.exported)
    }
}

/// Export file before palette validation
#[derive(Deserialize)]
struct RawExportDocument {
    palette: Vec<RawPaletteEntry>,
    #[serde(with = "millis")]
    exported: DateTime<Utc>,
}

/// Timestamps as `2024-01-31T12:00:00.000Z`
mod millis {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Share payload: a title plus one `name: color` line per entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShareMessage {
    #[schema(example = "My ChromaGen Color Palette")]
    pub title: String,
    pub text: String,
}

impl ShareMessage {
    pub fn new(palette: &Palette) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: share_text(palette),
        }
    }
}

/// Plain-text palette summary for sharing
pub fn share_text(palette: &Palette) -> String {
    let lines: Vec<String> = palette
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.color))
        .collect();
    format!("{SHARE_INTRO}\n\n{}", lines.join("\n"))
}
