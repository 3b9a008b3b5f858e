use color_engine::{ExtractError, PixelBuffer};
use image::{ImageReader, Limits};
use std::io::Cursor;

use crate::models::UploadConfig;

/// Error from decoding uploaded image bytes
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Unrecognized image format")]
    UnknownFormat,

    #[error("Failed to read image data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

/// A decoded image as straight RGBA8
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Borrow the pixels as an engine buffer
    pub fn buffer(&self) -> Result<PixelBuffer<'_>, ExtractError> {
        PixelBuffer::new(&self.rgba, self.width, self.height)
    }
}

/// Decodes uploaded bytes (PNG, JPEG, WebP, GIF, BMP) into RGBA pixels
///
/// Decoding is CPU-bound and synchronous. Callers on the async runtime run it
/// through `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct ImageDecoder {
    max_dimension: u32,
}

impl ImageDecoder {
    pub fn new(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(config.max_dimension)
    }

    /// Decode image bytes, guessing the format from the content
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        let mut reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        let Some(format) = reader.format() else {
            return Err(DecodeError::UnknownFormat);
        };

        let mut limits = Limits::default();
        limits.max_image_width = Some(self.max_dimension);
        limits.max_image_height = Some(self.max_dimension);
        reader.limits(limits);

        let img = reader.decode()?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        tracing::debug!(?format, width, height, "Decoded image");

        Ok(DecodedImage {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }
}

impl Default for ImageDecoder {
    fn default() -> Self {
        Self::from_config(&UploadConfig::default())
    }
}
