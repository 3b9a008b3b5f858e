//! Test fixtures and constants.

use image::{ImageFormat, Rgba, RgbaImage};
use serde_json::{json, Value};
use std::io::Cursor;

/// Band colors used by [`banded_png`], already on the 15-step bucket grid
pub mod bands {
    pub const RED: [u8; 3] = [210, 45, 45];
    pub const BLUE: [u8; 3] = [45, 90, 210];
    pub const GREEN: [u8; 3] = [60, 165, 90];

    pub const RED_HEX: &str = "#D22D2D";
    pub const BLUE_HEX: &str = "#2D5AD2";
    pub const GREEN_HEX: &str = "#3CA55A";
}

/// Encode an image in the given format
pub fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, format)
        .expect("Failed to encode fixture image");
    bytes.into_inner()
}

/// 40x40 PNG: 20 rows red, 12 rows blue, 8 rows green
pub fn banded_png() -> Vec<u8> {
    let image = RgbaImage::from_fn(40, 40, |_, y| {
        let [r, g, b] = match y {
            0..=19 => bands::RED,
            20..=31 => bands::BLUE,
            _ => bands::GREEN,
        };
        Rgba([r, g, b, 255])
    });
    encode(&image, ImageFormat::Png)
}

/// Same bands as [`banded_png`], as a BMP
pub fn banded_bmp() -> Vec<u8> {
    let png = image::load_from_memory(&banded_png()).expect("fixture decodes");
    encode(&png.to_rgba8(), ImageFormat::Bmp)
}

/// Fully transparent PNG
pub fn transparent_png() -> Vec<u8> {
    encode(&RgbaImage::new(16, 16), ImageFormat::Png)
}

/// PNG containing only pure black and pure white
pub fn black_and_white_png() -> Vec<u8> {
    let image = RgbaImage::from_fn(16, 16, |x, _| {
        if x < 8 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    encode(&image, ImageFormat::Png)
}

/// The sample "Tropical Sunset" palette
pub fn sunset_palette() -> Value {
    json!([
        {"color": "#FF6B35", "name": "Coral Orange", "type": "primary"},
        {"color": "#F7931E", "name": "Sunset Gold", "type": "primary"},
        {"color": "#FFD23F", "name": "Golden Yellow", "type": "secondary"},
        {"color": "#06FFA5", "name": "Mint Green", "type": "secondary"},
        {"color": "#4ECDC4", "name": "Turquoise", "type": "accent"},
        {"color": "#45B7D1", "name": "Ocean Blue", "type": "accent"}
    ])
}

/// Two-color palette with a known contrast ordering
pub fn snow_and_ink() -> Value {
    json!([
        {"color": "#FFFFFF", "name": "Snow", "type": "primary"},
        {"color": "#000000", "name": "Ink", "type": "secondary"}
    ])
}
