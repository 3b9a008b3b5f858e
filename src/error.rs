use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_engine::{EngineError, ExtractError, PaletteError, ParseColorError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::ExportError;
use crate::services::{ExtractionError, GeneratorError};

/// Error body returned by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = 422)]
    pub status: u16,
    #[schema(example = "invalid_palette")]
    pub kind: String,
    pub error: String,
    /// Text suitable for showing to end users
    pub message: String,
    /// Offending palette entry, for `invalid_palette`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color: {0}")]
    InvalidFormat(#[from] ParseColorError),

    #[error("Invalid palette: {0}")]
    InvalidPalette(#[from] PaletteError),

    #[error("No usable colors found in image")]
    EmptyPalette,

    #[error("Image decode failed: {0}")]
    DecodeFailed(String),

    #[error("Palette generation failed: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidFormat(_) => "invalid_format",
            ApiError::InvalidPalette(_) => "invalid_palette",
            ApiError::EmptyPalette => "empty_palette",
            ApiError::DecodeFailed(_) => "decode_failed",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
            ApiError::Internal(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidFormat(_) | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPalette(_) | ApiError::EmptyPalette | ApiError::DecodeFailed(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::ServiceUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Structured response body for this error
    pub fn body(&self) -> ErrorBody {
        let index = match self {
            ApiError::InvalidPalette(e) => e.index(),
            _ => None,
        };
        ErrorBody {
            status: self.status_code().as_u16(),
            kind: self.kind().to_string(),
            error: self.to_string(),
            message: self.user_message(),
            index,
        }
    }

    /// Human-readable message for end users
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidFormat(_) => {
                "That doesn't look like a color. Use a 6-digit hex code such as #FF6B35.".to_string()
            }
            ApiError::InvalidPalette(PaletteError::Empty) => "No palette to export.".to_string(),
            ApiError::InvalidPalette(PaletteError::InvalidEntry { index, .. }) => format!(
                "Color #{} in the palette is invalid. Check its hex code and type.",
                index + 1
            ),
            ApiError::EmptyPalette => {
                "No usable colors found. Try an image that is not mostly transparent, black or white."
                    .to_string()
            }
            ApiError::DecodeFailed(_) => {
                "Could not read the image. Please upload a PNG, JPEG, WebP, GIF or BMP file."
                    .to_string()
            }
            ApiError::ServiceUnavailable(_) => {
                "Failed to generate palette. Please try again.".to_string()
            }
            ApiError::InvalidRequest(reason) => reason.clone(),
            ApiError::UnsupportedMediaType(_) => "Please upload an image file.".to_string(),
            ApiError::Internal(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<ExtractError> for ApiError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::EmptyPalette => ApiError::EmptyPalette,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidFormat(e) => e.into(),
            EngineError::InvalidPalette(e) => e.into(),
            EngineError::Extract(e) => e.into(),
        }
    }
}

impl From<ExtractionError> for ApiError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::Decode(e) => ApiError::DecodeFailed(e.to_string()),
            ExtractionError::Extract(e) => e.into(),
            ExtractionError::Task(e) => ApiError::Internal(e),
        }
    }
}

impl From<GeneratorError> for ApiError {
    fn from(e: GeneratorError) -> Self {
        match e {
            GeneratorError::EmptyPrompt => {
                ApiError::InvalidRequest("Please enter a prompt describing the palette.".to_string())
            }
            other => ApiError::ServiceUnavailable(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::InvalidPalette(e) => e.into(),
            ExportError::Json(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "Request failed");
        } else {
            tracing::warn!(kind = self.kind(), error = %self, "Request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}
