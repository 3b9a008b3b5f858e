//! Integration tests for /api/generate and /api/palettes/random.

mod common;

use axum::http::StatusCode;
use common::{assert_error, assert_ok, assert_valid_palette, MockGeneratorServer, TestApp};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_generate_matches_library_palette() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/generate",
            &json!({"prompt": "Calming colors for a meditation app with ocean vibes"}),
        )
        .await;

    assert_ok(&response);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Ocean Calm");
    assert_eq!(assert_valid_palette(&body["palette"]).len(), 6);
}

#[tokio::test]
async fn test_generate_trims_prompt() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/generate",
            &json!({"prompt": "  Warm and cozy colors for a coffee shop brand \n"}),
        )
        .await;

    assert_ok(&response);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Coffee House");
}

#[tokio::test]
async fn test_generate_rejects_blank_prompt() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/generate", &json!({"prompt": "   "}))
        .await;

    let body = assert_error(&response, StatusCode::BAD_REQUEST, "invalid_request");
    assert_eq!(
        body["message"],
        "Please enter a prompt describing the palette."
    );
}

#[tokio::test]
async fn test_generate_rejects_missing_prompt() {
    let app = TestApp::new();

    let response = app.post_json("/api/generate", &json!({})).await;

    let body = assert_error(&response, StatusCode::BAD_REQUEST, "invalid_request");
    assert_eq!(
        body["message"],
        "Please enter a prompt describing the palette."
    );
}

#[tokio::test]
async fn test_generate_rejects_wrongly_typed_prompt() {
    let app = TestApp::new();

    let response = app.post_json("/api/generate", &json!({"prompt": 42})).await;

    assert_error(&response, StatusCode::BAD_REQUEST, "invalid_request");
}

#[tokio::test]
async fn test_generate_uses_remote_backend() {
    let mock = MockGeneratorServer::start().await;
    mock.mock_palette_for_prompt(
        "neon night market",
        json!({
            "name": "Neon Market",
            "colors": [
                {"color": "#ff00aa", "name": "Hot Pink", "type": "primary"},
                {"color": "#00E5FF", "name": "Cyan Glow", "type": "secondary"},
                {"color": "#1A1A2E", "name": "Night", "type": "accent"}
            ]
        }),
    )
    .await;

    let app = TestApp::with_remote_generator(&mock.url());
    let response = app
        .post_json("/api/generate", &json!({"prompt": " neon night market "}))
        .await;

    assert_ok(&response);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Neon Market");
    assert_eq!(
        assert_valid_palette(&body["palette"]),
        ["#FF00AA", "#00E5FF", "#1A1A2E"]
    );
}

#[tokio::test]
async fn test_generate_reports_invalid_remote_entry() {
    let mock = MockGeneratorServer::start().await;
    mock.mock_palette(json!({
        "name": "Broken",
        "colors": [
            {"color": "#FF6B35", "name": "Coral Orange", "type": "primary"},
            {"color": "#4ECDC4", "name": "Turquoise", "type": "highlight"}
        ]
    }))
    .await;

    let app = TestApp::with_remote_generator(&mock.url());
    let response = app
        .post_json("/api/generate", &json!({"prompt": "anything"}))
        .await;

    let body = assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "invalid_palette");
    assert_eq!(body["index"], 1);
}

#[tokio::test]
async fn test_generate_maps_upstream_status_to_bad_gateway() {
    let mock = MockGeneratorServer::start().await;
    mock.mock_status(503).await;

    let app = TestApp::with_remote_generator(&mock.url());
    let response = app
        .post_json("/api/generate", &json!({"prompt": "sunset"}))
        .await;

    let body = assert_error(&response, StatusCode::BAD_GATEWAY, "service_unavailable");
    assert_eq!(body["message"], "Failed to generate palette. Please try again.");
}

#[tokio::test]
async fn test_generate_rejects_unparseable_upstream_body() {
    let mock = MockGeneratorServer::start().await;
    mock.mock_garbage().await;

    let app = TestApp::with_remote_generator(&mock.url());
    let response = app
        .post_json("/api/generate", &json!({"prompt": "sunset"}))
        .await;

    assert_error(&response, StatusCode::BAD_GATEWAY, "service_unavailable");
}

#[tokio::test]
async fn test_generate_rejects_empty_upstream_palette() {
    let mock = MockGeneratorServer::start().await;
    mock.mock_palette(json!({"name": "Nothing", "colors": []}))
        .await;

    let app = TestApp::with_remote_generator(&mock.url());
    let response = app
        .post_json("/api/generate", &json!({"prompt": "sunset"}))
        .await;

    assert_error(&response, StatusCode::BAD_GATEWAY, "service_unavailable");
}

#[tokio::test]
async fn test_random_palette_comes_from_library() {
    let app = TestApp::new();

    let response = app.get("/api/palettes/random").await;

    assert_ok(&response);
    let body: serde_json::Value = response.json();
    let name = body["name"].as_str().unwrap();
    assert!(
        app.state.library.get(name).is_some(),
        "{name} is not a library palette"
    );
    assert_valid_palette(&body["palette"]);
}
