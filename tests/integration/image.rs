//! Avatar image proxy integration tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestHarness;

#[tokio::test]
async fn test_default_tag_search() {
    let harness = TestHarness::new(&[]).await;
    harness
        .waifu
        .mock_search_success("waifu", "https://cdn.waifu.im/1.png")
        .await;

    let response = harness
        .server
        .post("/api/generate-image")
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["url"], "https://cdn.waifu.im/1.png");
    assert_eq!(json["source"], "https://www.pixiv.net/en/artworks/12345");
    assert_eq!(json["tags"][0]["name"], "waifu");
}

#[tokio::test]
async fn test_empty_body_uses_defaults() {
    let harness = TestHarness::new(&[]).await;
    harness
        .waifu
        .mock_search_success("waifu", "https://cdn.waifu.im/2.png")
        .await;

    let response = harness.server.post("/api/generate-image").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["url"], "https://cdn.waifu.im/2.png");
}

#[tokio::test]
async fn test_requested_tag_forwarded() {
    let harness = TestHarness::new(&[]).await;
    harness
        .waifu
        .mock_search_success("maid", "https://cdn.waifu.im/maid.png")
        .await;

    let response = harness
        .server
        .post("/api/generate-image")
        .json(&json!({ "tags": ["maid"], "isNSFW": false }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["url"], "https://cdn.waifu.im/maid.png");
}

#[tokio::test]
async fn test_no_images_is_404() {
    let harness = TestHarness::new(&[]).await;
    harness.waifu.mock_search_empty().await;

    let response = harness
        .server
        .post("/api/generate-image")
        .json(&json!({ "tags": ["waifu"] }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_upstream_failure_is_502() {
    let harness = TestHarness::new(&[]).await;
    harness.waifu.mock_search_error(500).await;

    let response = harness
        .server
        .post("/api/generate-image")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["error"]["code"], "UPSTREAM_ERROR");
}
