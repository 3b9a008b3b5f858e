//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response and return its JSON body
///
/// Every error body carries the HTTP status, a machine-readable kind and a
/// user-facing message.
pub fn assert_error(
    response: &TestResponse,
    expected: StatusCode,
    kind: &str,
) -> serde_json::Value {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();

    assert_eq!(json["status"].as_u64(), Some(u64::from(expected.as_u16())));
    assert_eq!(json["kind"], kind, "Full response: {json}");
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "Expected a user message: {json}"
    );
    json
}

/// Assert a palette in JSON form has valid entries and return its colors
pub fn assert_valid_palette(palette: &serde_json::Value) -> Vec<String> {
    let entries = palette.as_array().expect("Expected palette array");
    assert!(!entries.is_empty(), "Expected a non-empty palette");

    entries
        .iter()
        .map(|entry| {
            let color = entry["color"].as_str().expect("Expected color string");
            assert_eq!(color.len(), 7, "Expected #RRGGBB, got {color}");
            assert!(color.starts_with('#'));
            assert_eq!(color, color.to_uppercase(), "Expected uppercase hex");
            assert!(entry["name"].is_string());
            assert!(
                matches!(
                    entry["type"].as_str(),
                    Some("primary" | "secondary" | "accent")
                ),
                "Unexpected role in {entry}"
            );
            color.to_string()
        })
        .collect()
}
