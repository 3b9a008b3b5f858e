//! Error types for dominant color extraction.

use std::fmt;

use super::ExtractionStage;

/// Error type for dominant color extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// No pixel survived the alpha and brightness filters
    EmptyPalette,
    /// Pixel buffer length does not match `width * height * 4`
    BufferSize {
        /// Expected byte length
        expected: usize,
        /// Actual byte length
        actual: usize,
    },
    /// The requested transition is not allowed from the current stage
    InvalidStage {
        /// Stage the extractor was in
        stage: ExtractionStage,
        /// The operation that was attempted
        operation: &'static str,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::EmptyPalette => {
                write!(f, "no usable pixels found in image")
            }
            ExtractError::BufferSize { expected, actual } => {
                write!(
                    f,
                    "pixel buffer size mismatch: expected {expected} bytes, got {actual}"
                )
            }
            ExtractError::InvalidStage { stage, operation } => {
                write!(f, "cannot {operation} while extractor is {stage}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}
