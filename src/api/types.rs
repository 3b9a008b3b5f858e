//! Shared request/response bodies and OpenAPI schema types.

use color_engine::{
    assemble, relative_luminance, Color, ContrastCheck, Palette, PaletteEntry, RawPaletteEntry,
    WcagLevel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use crate::error::ErrorBody;
use crate::error::ApiError;

/// One palette entry on the wire
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaletteEntryDoc {
    /// Hex color, `#RRGGBB`
    #[schema(example = "#FF6B35")]
    pub color: String,
    /// Display name
    #[schema(example = "Coral Orange")]
    pub name: String,
    /// Usage weight: `primary`, `secondary` or `accent`
    #[serde(rename = "type")]
    #[schema(example = "primary")]
    pub role: String,
}

/// Request body carrying a palette to validate
#[derive(Debug, Deserialize, ToSchema)]
pub struct PaletteRequest {
    #[schema(value_type = Vec<PaletteEntryDoc>)]
    pub palette: Vec<RawPaletteEntry>,
}

impl PaletteRequest {
    /// Validate the payload, reporting the first bad entry
    pub fn assemble(&self) -> Result<Palette, ApiError> {
        Ok(assemble(&self.palette)?)
    }
}

/// A named palette
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    /// Palette name
    pub name: String,
    #[schema(value_type = Vec<PaletteEntryDoc>)]
    pub palette: Palette,
}

/// One row of an accessibility report
#[derive(Debug, Serialize, ToSchema)]
pub struct ContrastCheckView {
    #[schema(value_type = PaletteEntryDoc)]
    pub background: PaletteEntry,
    #[schema(value_type = String, example = "#FFFFFF")]
    pub foreground: Color,
    /// Contrast ratio, two decimals
    #[schema(example = 4.53)]
    pub ratio: f64,
    /// `AAA`, `AA`, `AA-Large` or `Fail`
    #[schema(value_type = String, example = "AA")]
    pub level: WcagLevel,
    /// `excellent`, `good`, `warning` or `poor`
    #[schema(example = "good")]
    pub status: String,
}

impl From<&ContrastCheck> for ContrastCheckView {
    fn from(check: &ContrastCheck) -> Self {
        Self {
            background: check.background.clone(),
            foreground: check.foreground,
            ratio: check.rounded_ratio(),
            level: check.level,
            status: check.level.status().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RgbView {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HslView {
    /// Hue in degrees, 0-359
    pub h: u16,
    /// Saturation in percent
    pub s: u8,
    /// Lightness in percent
    pub l: u8,
}

/// Every display format of a single color
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorDetails {
    #[schema(example = "#336699")]
    pub hex: String,
    pub rgb: RgbView,
    pub hsl: HslView,
    #[schema(example = "rgb(51, 102, 153)")]
    pub css_rgb: String,
    #[schema(example = "hsl(210, 50%, 40%)")]
    pub css_hsl: String,
    #[schema(example = "Blue")]
    pub name: String,
    /// WCAG relative luminance, 0-1
    pub luminance: f64,
}

impl From<Color> for ColorDetails {
    fn from(color: Color) -> Self {
        let rgb = color.rgb();
        let hsl = color.hsl();
        Self {
            hex: color.hex(),
            rgb: RgbView {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            },
            hsl: HslView {
                h: hsl.h,
                s: hsl.s,
                l: hsl.l,
            },
            css_rgb: color.css_rgb(),
            css_hsl: color.css_hsl(),
            name: color_engine::color_name(color).to_string(),
            luminance: relative_luminance(color),
        }
    }
}
