//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use chromagen::assets::AssetLoader;
use chromagen::models::{AppConfig, GeneratorBackend};
use chromagen::server::{build_router, create_app_state, AppState};
use chromagen::services::{generator_from_config, PaletteLibrary};
use std::sync::Arc;

/// Test application wrapping the production router
pub struct TestApp {
    router: axum::Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        Self::from_state(Self::create_state())
    }

    /// Create a test application with a custom config and the embedded library
    pub fn with_config(config: AppConfig) -> Self {
        let library = Arc::new(
            PaletteLibrary::load(&AssetLoader::embedded()).expect("Failed to load library"),
        );
        let generator = generator_from_config(&config.generator, library.clone())
            .expect("Failed to create generator");
        Self::from_state(AppState::new(config, library, generator))
    }

    /// Create a test application whose generator calls a remote URL
    pub fn with_remote_generator(url: &str) -> Self {
        let mut config = AppConfig::default();
        config.generator.backend = GeneratorBackend::Remote;
        config.generator.url = Some(url.to_string());
        config.generator.timeout_secs = 2;
        Self::with_config(config)
    }

    /// Create application state from embedded assets
    pub fn create_state() -> AppState {
        create_app_state(&AssetLoader::embedded()).expect("Failed to create app state")
    }

    fn from_state(state: AppState) -> Self {
        // Build router using shared server module (same as production)
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        self.request(
            Request::post(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with a raw body and content type
    pub async fn post_bytes(&self, path: &str, content_type: &str, body: Vec<u8>) -> TestResponse {
        self.request(
            Request::post(path)
                .header("Content-Type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get a header value as string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
