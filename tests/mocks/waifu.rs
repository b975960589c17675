//! Mock waifu.im server for testing
//!
//! Provides wiremock-based mocks for `GET /search`.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Mock waifu.im server wrapper
pub struct MockWaifu {
    server: MockServer,
}

impl MockWaifu {
    /// Start a new mock waifu.im server
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

    /// Mock a search for `tag` returning one image
    pub async fn mock_search_success(&self, tag: &str, image_url: &str) {
        let body = json!({
            "images": [image_json(image_url, tag)]
        });

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(header("Accept-Version", "v6"))
            .and(query_param("included_tags", tag))
            .and(query_param("is_nsfw", "false"))
            .and(query_param("height", ">=2000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a search that matches nothing
    pub async fn mock_search_empty(&self) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "images": [] })))
            .mount(&self.server)
            .await;
    }

    /// Mock an upstream failure
    pub async fn mock_search_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "detail": "mock failure" })),
            )
            .mount(&self.server)
            .await;
    }
}

/// One image entry in waifu.im's v6 shape
pub fn image_json(url: &str, tag: &str) -> Value {
    json!({
        "signature": "abc123",
        "extension": ".png",
        "image_id": 8108,
        "favorites": 3,
        "dominant_color": "#d0c7c9",
        "source": "https://www.pixiv.net/en/artworks/12345",
        "uploaded_at": "2024-01-01T00:00:00Z",
        "is_nsfw": false,
        "width": 2000,
        "height": 3000,
        "url": url,
        "tags": [{
            "tag_id": 12,
            "name": tag,
            "description": "mock tag",
            "is_nsfw": false
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_starts() {
        let mock = MockWaifu::start().await;
        assert!(!mock.uri().is_empty());
    }
}
