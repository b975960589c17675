//! Mock Gemini API server for testing
//!
//! Provides wiremock-based mocks for `POST /v1beta/models/{model}:generateContent`.
//! Responses are keyed on the `x-goog-api-key` header, so each credential in
//! a pool can be scripted independently. Requests for a key without a mock
//! fall through to wiremock's default 404, which the relay treats as a
//! failed credential.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::gemini::MockGemini;
//!
//! #[tokio::test]
//! async fn test_with_gemini_mock() {
//!     let gemini = MockGemini::start().await;
//!     gemini.mock_status_for_key("k1", 429).await;
//!     gemini.mock_reply_for_key("k2", "Hello!").await;
//!
//!     // Use gemini.uri() as GEMINI_API_URL
//!     // ...
//!     assert_eq!(gemini.keys_tried().await, vec!["k1", "k2"]);
//! }
//! ```

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Model used by the test configuration
pub const TEST_MODEL: &str = "gemini-pro";

/// Header carrying the credential
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Path of the generate endpoint for [`TEST_MODEL`]
pub fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", TEST_MODEL)
}

/// Mock Gemini API server wrapper
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

    /// Get all received requests (for assertion in tests)
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Credentials used by received requests, in arrival order
    pub async fn keys_tried(&self) -> Vec<String> {
        self.received_requests()
            .await
            .iter()
            .filter_map(|r| {
                r.headers
                    .get(API_KEY_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            })
            .collect()
    }

    /// JSON bodies of received requests, in arrival order
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.received_requests()
            .await
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("request body should be JSON"))
            .collect()
    }

    /// Mock a successful reply for one credential
    pub async fn mock_reply_for_key(&self, key: &str, text: &str) {
        self.mount_for_key(key, ResponseTemplate::new(200).set_body_json(reply_body(text)))
            .await;
    }

    /// Mock a successful reply that only arrives after `delay`
    pub async fn mock_slow_reply_for_key(&self, key: &str, text: &str, delay: Duration) {
        self.mount_for_key(
            key,
            ResponseTemplate::new(200)
                .set_body_json(reply_body(text))
                .set_delay(delay),
        )
        .await;
    }

    /// Mock an HTTP error for one credential
    pub async fn mock_status_for_key(&self, key: &str, status: u16) {
        let body = json!({
            "error": {
                "code": status,
                "message": "mock upstream failure",
                "status": "RESOURCE_EXHAUSTED"
            }
        });
        self.mount_for_key(key, ResponseTemplate::new(status).set_body_json(body))
            .await;
    }

    /// Mock a 200 whose envelope has no candidate text
    pub async fn mock_missing_text_for_key(&self, key: &str) {
        let body = json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        });
        self.mount_for_key(key, ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    /// Mock a 200 with a body that isn't JSON
    pub async fn mock_garbage_for_key(&self, key: &str) {
        self.mount_for_key(key, ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .await;
    }

    async fn mount_for_key(&self, key: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(generate_path()))
            .and(header(API_KEY_HEADER, key))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }
}

/// A `generateContent` response carrying `text`
pub fn reply_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 5,
            "candidatesTokenCount": 7,
            "totalTokenCount": 12
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_starts() {
        let mock = MockGemini::start().await;
        assert!(!mock.uri().is_empty());
    }

    #[tokio::test]
    async fn test_reply_routed_by_key() {
        let mock = MockGemini::start().await;
        mock.mock_reply_for_key("good", "hi").await;

        let client = reqwest::Client::new();
        let url = format!("{}{}", mock.uri(), generate_path());

        let ok = client
            .post(&url)
            .header(API_KEY_HEADER, "good")
            .json(&json!({ "contents": [] }))
            .send()
            .await
            .unwrap();
        assert_eq!(ok.status().as_u16(), 200);
        let body: Value = ok.json().await.unwrap();
        assert_eq!(body["candidates"][0]["content"]["parts"][0]["text"], "hi");

        let unknown = client
            .post(&url)
            .header(API_KEY_HEADER, "other")
            .json(&json!({ "contents": [] }))
            .send()
            .await
            .unwrap();
        assert_eq!(unknown.status().as_u16(), 404);

        assert_eq!(mock.keys_tried().await, vec!["good", "other"]);
    }
}
