//! Integration tests for /api/report.

mod common;

use axum::http::StatusCode;
use common::fixtures;
use common::{assert_error, assert_ok, TestApp};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_report_for_sample_palette() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/report", &json!({"palette": fixtures::sunset_palette()}))
        .await;

    assert_ok(&response);
    let body: serde_json::Value = response.json();
    let checks = body["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 6);

    let ratios: Vec<f64> = checks
        .iter()
        .map(|c| c["ratio"].as_f64().unwrap())
        .collect();
    assert!(
        ratios.windows(2).all(|w| w[0] >= w[1]),
        "ratios not descending: {ratios:?}"
    );

    for check in checks {
        assert_ne!(check["background"]["type"], "accent");
        assert_ne!(check["background"]["color"], check["foreground"]);
        assert!(matches!(
            check["level"].as_str(),
            Some("AAA" | "AA" | "AA-Large" | "Fail")
        ));
    }
}

#[tokio::test]
async fn test_report_black_and_white() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/report", &json!({"palette": fixtures::snow_and_ink()}))
        .await;

    assert_ok(&response);
    let body: serde_json::Value = response.json();
    let checks = body["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 4);

    assert_eq!(
        checks[0],
        json!({
            "background": {"color": "#FFFFFF", "name": "Snow", "type": "primary"},
            "foreground": "#000000",
            "ratio": 21.0,
            "level": "AAA",
            "status": "excellent"
        })
    );
    assert_eq!(checks[2]["background"]["name"], "Ink");
    assert_eq!(checks[2]["foreground"], "#FFFFFF");
}

#[tokio::test]
async fn test_report_respects_limit() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/report",
            &json!({"palette": fixtures::sunset_palette(), "limit": 2}),
        )
        .await;

    assert_ok(&response);
    let body: serde_json::Value = response.json();
    assert_eq!(body["checks"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_report_skips_accent_only_palette() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/report",
            &json!({"palette": [{"color": "#45B7D1", "name": "Ocean Blue", "type": "accent"}]}),
        )
        .await;

    assert_ok(&response);
    let body: serde_json::Value = response.json();
    assert_eq!(body["checks"], json!([]));
}

#[tokio::test]
async fn test_report_rejects_unknown_role() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/report",
            &json!({"palette": [
                {"color": "#FF6B35", "name": "Coral Orange", "type": "primary"},
                {"color": "#4ECDC4", "name": "Turquoise", "type": "highlight"}
            ]}),
        )
        .await;

    let body = assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "invalid_palette");
    assert_eq!(body["index"], 1);
}

#[tokio::test]
async fn test_report_rejects_malformed_color() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/report",
            &json!({"palette": [
                {"color": "#FF6B3", "name": "Short", "type": "primary"}
            ]}),
        )
        .await;

    let body = assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "invalid_palette");
    assert_eq!(body["index"], 0);
}

#[tokio::test]
async fn test_report_reports_entry_missing_type() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/report",
            &json!({"palette": [{"color": "#336699", "name": "Blue"}]}),
        )
        .await;

    let body = assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "invalid_palette");
    assert_eq!(body["index"], 0);
}

#[tokio::test]
async fn test_report_rejects_malformed_json() {
    let app = TestApp::new();

    let response = app
        .post_bytes("/api/report", "application/json", b"{\"palette\": [".to_vec())
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "invalid_request");
}

#[tokio::test]
async fn test_report_requires_json_content_type() {
    let app = TestApp::new();

    let body = json!({"palette": fixtures::snow_and_ink()}).to_string();
    let response = app
        .post_bytes("/api/report", "text/plain", body.into_bytes())
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "invalid_request");
}
