use axum::{extract::Path, response::Json};
use color_engine::Color;

use super::types::{ColorDetails, ErrorBody};
use crate::error::ApiError;

/// Describe a single color
///
/// Returns the hex, `rgb()` and `hsl()` forms shown on a color card, plus
/// the generated name and relative luminance. The leading `#` is optional
/// (send it as `%23` if present).
#[utoipa::path(
    get,
    path = "/api/colors/{hex}",
    params(
        ("hex" = String, Path, description = "6-digit hex color, e.g. '336699'"),
    ),
    responses(
        (status = 200, description = "Color details", body = ColorDetails),
        (status = 400, description = "Malformed color", body = ErrorBody),
    ),
    tag = "Colors"
)]
pub async fn handle_color(Path(hex): Path<String>) -> Result<Json<ColorDetails>, ApiError> {
    let color: Color = hex.parse()?;
    Ok(Json(ColorDetails::from(color)))
}
