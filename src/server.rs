//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::services::{generator_from_config, ExtractionService, PaletteGenerator, PaletteLibrary};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub library: Arc<PaletteLibrary>,
    pub generator: Arc<dyn PaletteGenerator>,
    pub extraction: Arc<ExtractionService>,
}

impl AppState {
    /// Assemble state from already-built parts.
    pub fn new(
        config: AppConfig,
        library: Arc<PaletteLibrary>,
        generator: Arc<dyn PaletteGenerator>,
    ) -> Self {
        let extraction = Arc::new(ExtractionService::from_config(&config));
        Self {
            config: Arc::new(config),
            library,
            generator,
            extraction,
        }
    }
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: &AssetLoader) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(asset_loader);
    let library = Arc::new(
        PaletteLibrary::load(asset_loader)
            .map_err(|e| anyhow::anyhow!("Failed to load palette library: {e}"))?,
    );
    let generator = generator_from_config(&config.generator, library.clone())
        .map_err(|e| anyhow::anyhow!("Failed to create palette generator: {e}"))?;

    tracing::info!(backend = generator.backend(), "Palette generator ready");

    Ok(AppState::new(config, library, generator))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_bytes;

    Router::new()
        .route("/api/generate", post(api::handle_generate))
        .route("/api/palettes/random", get(api::handle_random_palette))
        .route("/api/extract", post(api::handle_extract))
        .route("/api/report", post(api::handle_report))
        .route("/api/export", post(api::handle_export))
        .route("/api/share", post(api::handle_share))
        .route("/api/colors/:hex", get(api::handle_color))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
