use axum::{extract::State, response::Json};
use color_engine::{assemble, build_report_with_limit, RawPaletteEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::json::ApiJson;
use super::types::{ContrastCheckView, ErrorBody, PaletteEntryDoc};
use crate::error::ApiError;
use crate::server::AppState;

/// Request body for an accessibility report
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReportRequest {
    #[schema(value_type = Vec<PaletteEntryDoc>)]
    pub palette: Vec<RawPaletteEntry>,
    /// Maximum number of checks (defaults to `report.limit`)
    pub limit: Option<usize>,
}

/// WCAG contrast report for a palette
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    /// Highest-contrast pairings first
    pub checks: Vec<ContrastCheckView>,
}

/// Build a WCAG accessibility report
///
/// Pairs every primary and secondary color with white, black and every
/// other palette color, and returns the highest-contrast pairings.
#[utoipa::path(
    post,
    path = "/api/report",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Report built", body = ReportResponse),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Invalid palette", body = ErrorBody),
    ),
    tag = "Accessibility"
)]
pub async fn handle_report(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ReportRequest>,
) -> Result<Json<ReportResponse>, ApiError> {
    let palette = assemble(&request.palette)?;
    let limit = request.limit.unwrap_or(state.config.report.limit);

    let checks = build_report_with_limit(&palette, limit);

    tracing::debug!(
        colors = palette.len(),
        checks = checks.len(),
        passing = checks.iter().filter(|c| c.level.passes()).count(),
        "Accessibility report built"
    );

    Ok(Json(ReportResponse {
        checks: checks.iter().map(ContrastCheckView::from).collect(),
    }))
}
