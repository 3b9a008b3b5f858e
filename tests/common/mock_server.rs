//! Mock palette generation service.

use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Path the remote generator is pointed at
pub const GENERATE_PATH: &str = "/generate";

/// Wrapper around wiremock MockServer with generator responses
pub struct MockGeneratorServer {
    pub server: MockServer,
}

impl MockGeneratorServer {
    /// Start a new mock server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// URL to configure as `generator.url`
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), GENERATE_PATH)
    }

    /// Respond to any generate call with the given JSON
    pub async fn mock_palette(&self, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// Respond only when the request carries the expected prompt
    pub async fn mock_palette_for_prompt(&self, prompt: &str, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_json(serde_json::json!({ "prompt": prompt })))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Respond with an error status
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream failure"))
            .mount(&self.server)
            .await;
    }

    /// Respond with a body that is not a palette
    pub async fn mock_garbage(&self) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&self.server)
            .await;
    }
}
