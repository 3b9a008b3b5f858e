use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    response::Json,
};
use color_engine::{DominantColor, Palette};
use serde::Serialize;
use utoipa::ToSchema;

use super::types::{ErrorBody, PaletteEntryDoc};
use crate::error::ApiError;
use crate::server::AppState;

/// One ranked color found in the image
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractedColorDoc {
    #[schema(example = "#2D6996")]
    pub color: String,
    #[schema(example = "Blue")]
    pub name: String,
    /// Sampled pixels in this color's bucket
    pub count: u32,
}

/// Palette extracted from an uploaded image
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractResponse {
    /// Colors with rank-based roles
    #[schema(value_type = Vec<PaletteEntryDoc>)]
    pub palette: Palette,
    /// Ranked colors, most frequent first
    #[schema(value_type = Vec<ExtractedColorDoc>)]
    pub colors: Vec<DominantColor>,
}

/// Whether a `Content-Type` header value names an image type
pub fn is_image_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or_default().trim();
    mime.len() > "image/".len()
        && mime
            .get(.."image/".len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Extract a palette from an image
///
/// The raw image bytes are the request body. PNG, JPEG, WebP, GIF and BMP
/// are decoded; the upload size is capped by `upload.max_bytes`.
#[utoipa::path(
    post,
    path = "/api/extract",
    request_body(content = Vec<u8>, content_type = "image/*", description = "Raw image bytes"),
    responses(
        (status = 200, description = "Palette extracted", body = ExtractResponse),
        (status = 400, description = "Empty upload", body = ErrorBody),
        (status = 413, description = "Upload too large"),
        (status = 415, description = "Not an image", body = ErrorBody),
        (status = 422, description = "Undecodable image or no usable colors", body = ErrorBody),
    ),
    tag = "Images"
)]
pub async fn handle_extract(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ExtractResponse>, ApiError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !is_image_content_type(content_type) {
        return Err(ApiError::UnsupportedMediaType(if content_type.is_empty() {
            "missing Content-Type".to_string()
        } else {
            content_type.to_string()
        }));
    }
    if body.is_empty() {
        return Err(ApiError::InvalidRequest("Image upload is empty.".to_string()));
    }

    tracing::info!(
        content_type = content_type,
        size = body.len(),
        "Extract request received"
    );

    let extracted = state.extraction.extract(body.to_vec()).await?;

    Ok(Json(ExtractResponse {
        palette: extracted.palette,
        colors: extracted.colors,
    }))
}
