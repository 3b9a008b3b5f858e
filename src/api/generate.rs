use axum::{extract::State, response::Json};
use serde::Deserialize;
use utoipa::ToSchema;

use super::json::ApiJson;
use super::types::{ErrorBody, PaletteResponse};
use crate::error::ApiError;
use crate::server::AppState;
use crate::services::generate_from_prompt;

/// Request body for prompt-based generation
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Free-text description of the palette
    #[serde(default)]
    #[schema(example = "Calming colors for a meditation app with ocean vibes")]
    pub prompt: String,
}

/// Generate a palette from a prompt
///
/// The prompt goes to the configured generator (local library match or a
/// remote service). The returned colors are validated before they reach the
/// client.
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Palette generated", body = PaletteResponse),
        (status = 400, description = "Empty prompt or malformed body", body = ErrorBody),
        (status = 422, description = "Generator returned an invalid palette", body = ErrorBody),
        (status = 502, description = "Generation service failed", body = ErrorBody),
    ),
    tag = "Palettes"
)]
pub async fn handle_generate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let generated = generate_from_prompt(state.generator.as_ref(), &request.prompt).await?;
    let palette = generated.assemble()?;

    tracing::info!(
        palette = %generated.name,
        colors = palette.len(),
        "Palette generated"
    );

    Ok(Json(PaletteResponse {
        name: generated.name,
        palette,
    }))
}

/// Pick a random palette from the library
#[utoipa::path(
    get,
    path = "/api/palettes/random",
    responses(
        (status = 200, description = "Random library palette", body = PaletteResponse),
    ),
    tag = "Palettes"
)]
pub async fn handle_random_palette(
    State(state): State<AppState>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let entry = state
        .library
        .random()
        .ok_or_else(|| ApiError::Internal("Palette library is empty".to_string()))?;
    let palette = entry.palette()?;

    tracing::debug!(palette = %entry.name, "Random palette picked");

    Ok(Json(PaletteResponse {
        name: entry.name.clone(),
        palette,
    }))
}
