//! Mock Gemini API for testing
//!
//! Provides wiremock-based mocks for the `generateContent` endpoint:
//! - successful generations with one or more candidates
//! - structured and unstructured error bodies
//! - malformed success bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::gemini::{MockGemini, GeminiTestData};
//!
//! #[tokio::test]
//! async fn test_with_gemini_mock() {
//!     let gemini = MockGemini::start().await;
//!     gemini.mock_generate_success(GeminiTestData::text_response("Hi!")).await;
//!
//!     // Use gemini.uri() as GEMINI_API_URL
//! }
//! ```

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::{TEST_GEMINI_API_KEY, TEST_MODEL};

/// Mock Gemini server wrapper
pub struct MockGemini {
    server: MockServer,
}

impl MockGemini {
    /// Start a new mock Gemini server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Path of the generateContent endpoint for the test model
    pub fn generate_path() -> String {
        format!("/v1beta/models/{}:generateContent", TEST_MODEL)
    }

    fn generate_mock() -> wiremock::MockBuilder {
        Mock::given(method("POST"))
            .and(path(Self::generate_path()))
            .and(query_param("key", TEST_GEMINI_API_KEY))
            .and(header("Content-Type", "application/json"))
    }

    // =========================================================================
    // POST /v1beta/models/{model}:generateContent
    // =========================================================================

    /// Mock a successful generation for any payload
    pub async fn mock_generate_success(&self, response: Value) {
        Self::generate_mock()
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// Mock a successful generation that only matches an exact payload
    pub async fn mock_generate_expecting(&self, payload: Value, response: Value) {
        Self::generate_mock()
            .and(body_json(payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock an upstream error with a JSON body
    pub async fn mock_generate_error_json(&self, status: u16, body: Value) {
        Self::generate_mock()
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock an upstream error with a raw text body
    pub async fn mock_generate_error_text(&self, status: u16, body: &str) {
        Self::generate_mock()
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is not JSON
    pub async fn mock_generate_non_json(&self, body: &str) {
        Self::generate_mock()
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .insert_header("Content-Type", "text/plain"),
            )
            .mount(&self.server)
            .await;
    }

    /// Number of requests the mock has received
    pub async fn received_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

/// Canned Gemini bodies
pub struct GeminiTestData;

impl GeminiTestData {
    /// A single-candidate text response
    pub fn text_response(text: &str) -> Value {
        json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{ "text": text }]
                    },
                    "finishReason": "STOP",
                    "index": 0
                }
            ],
            "usageMetadata": {
                "promptTokenCount": 4,
                "candidatesTokenCount": 7,
                "totalTokenCount": 11
            },
            "modelVersion": TEST_MODEL
        })
    }

    /// A 2xx body without candidates (e.g. prompt blocked)
    pub fn blocked_response() -> Value {
        json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })
    }

    /// Standard Google API error envelope
    pub fn error_body(code: u16, message: &str, status: &str) -> Value {
        json!({
            "error": {
                "code": code,
                "message": message,
                "status": status
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_starts_without_requests() {
        let gemini = MockGemini::start().await;
        assert!(gemini.uri().starts_with("http://"));
        assert_eq!(gemini.received_count().await, 0);
    }

    #[test]
    fn test_text_response_shape() {
        let body = GeminiTestData::text_response("hello");
        assert_eq!(body["candidates"][0]["content"]["parts"][0]["text"], "hello");
    }
}
