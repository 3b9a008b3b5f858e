use axum::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Json},
};

use super::json::ApiJson;
use super::types::{ErrorBody, PaletteRequest};
use crate::error::ApiError;
use crate::models::{ExportDocument, ShareMessage, EXPORT_FILE_NAME};

/// Export a palette as a downloadable JSON document
///
/// The response is `{"palette": [...], "exported": "<ISO-8601>"}`, sent as an
/// attachment named `chromagen-palette.json`.
#[utoipa::path(
    post,
    path = "/api/export",
    request_body = PaletteRequest,
    responses(
        (status = 200, description = "Export document", content_type = "application/json",
            headers(("Content-Disposition" = String, description = "attachment; filename=\"chromagen-palette.json\""))),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Empty or invalid palette", body = ErrorBody),
    ),
    tag = "Export"
)]
pub async fn handle_export(
    ApiJson(request): ApiJson<PaletteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let document = ExportDocument::new(request.assemble()?)?;
    let json = document.to_json_pretty()?;

    tracing::info!(
        colors = document.palette.len(),
        exported = %document.exported,
        "Palette exported"
    );

    Ok((
        [
            (CONTENT_TYPE, "application/json".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        json,
    ))
}

/// Build a share message for a palette
#[utoipa::path(
    post,
    path = "/api/share",
    request_body = PaletteRequest,
    responses(
        (status = 200, description = "Share title and text", body = ShareMessage),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Invalid palette", body = ErrorBody),
    ),
    tag = "Export"
)]
pub async fn handle_share(
    ApiJson(request): ApiJson<PaletteRequest>,
) -> Result<Json<ShareMessage>, ApiError> {
    let palette = request.assemble()?;
    Ok(Json(ShareMessage::new(&palette)))
}
