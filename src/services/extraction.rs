use color_engine::{DominantColor, DominantColorExtractor, ExtractError, ExtractOptions, Palette};

use super::image_decoder::{DecodeError, ImageDecoder};
use crate::models::AppConfig;

/// Result of extracting a palette from an uploaded image
#[derive(Debug, Clone)]
pub struct ExtractedPalette {
    /// Palette with rank-based roles
    pub palette: Palette,
    /// Ranked colors with their pixel counts
    pub colors: Vec<DominantColor>,
    pub width: u32,
    pub height: u32,
}

/// Error from the extraction pipeline
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Image bytes → decoded pixels → dominant colors → palette
#[derive(Debug, Clone)]
pub struct ExtractionService {
    decoder: ImageDecoder,
    options: ExtractOptions,
}

impl ExtractionService {
    pub fn new(decoder: ImageDecoder, options: ExtractOptions) -> Self {
        Self { decoder, options }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            ImageDecoder::from_config(&config.upload),
            config.extraction.clone(),
        )
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Run the whole pipeline on the current thread
    pub fn extract_blocking(&self, bytes: &[u8]) -> Result<ExtractedPalette, ExtractionError> {
        let mut extractor = DominantColorExtractor::new(self.options.clone());
        extractor.begin_decode()?;

        let image = match self.decoder.decode(bytes) {
            Ok(image) => image,
            Err(e) => {
                extractor.decode_failed()?;
                tracing::warn!(error = %e, size = bytes.len(), "Image decode failed");
                return Err(e.into());
            }
        };

        let buffer = image.buffer()?;
        let extraction = extractor.extract(&buffer).inspect_err(|e| {
            tracing::info!(
                error = %e,
                width = image.width,
                height = image.height,
                "No palette extracted"
            );
        })?;

        tracing::info!(
            width = image.width,
            height = image.height,
            sampled = extraction.sampled,
            kept = extraction.kept,
            buckets = extraction.buckets,
            colors = extraction.colors.len(),
            "Extracted palette from image"
        );

        Ok(ExtractedPalette {
            palette: Palette::from_extraction(extraction.colors.clone()),
            colors: extraction.colors,
            width: image.width,
            height: image.height,
        })
    }

    /// Run the pipeline on a blocking worker thread
    pub async fn extract(&self, bytes: Vec<u8>) -> Result<ExtractedPalette, ExtractionError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.extract_blocking(&bytes))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))?
    }
}
