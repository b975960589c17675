//! Health, config and metrics endpoint integration tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestHarness;

#[tokio::test]
async fn test_api_health_reports_key_count() {
    let harness = TestHarness::new(&["k1", "k2"]).await;

    let response = harness.server.get("/api/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["geminiKeys"], 2);
    assert_eq!(json["waifuApi"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["time"].as_str().is_some());
    assert!(json["uptimeSeconds"].as_u64().is_some());
}

#[tokio::test]
async fn test_api_health_ok_without_keys() {
    let harness = TestHarness::new(&[]).await;

    let response = harness.server.get("/api/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["geminiKeys"], 0);
}

#[tokio::test]
async fn test_liveness_probe() {
    let harness = TestHarness::new(&[]).await;

    let response = harness.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_config_reports_key_presence() {
    let with_keys = TestHarness::new(&["k1"]).await;
    let json: Value = with_keys.server.get("/api/config").await.json();
    assert_eq!(json["hasGeminiKeys"], true);
    assert_eq!(json["waifuApiAvailable"], true);

    let without_keys = TestHarness::new(&[]).await;
    let json: Value = without_keys.server.get("/api/config").await.json();
    assert_eq!(json["hasGeminiKeys"], false);
}

#[tokio::test]
async fn test_config_never_exposes_keys() {
    let harness = TestHarness::new(&["secret-key-1"]).await;

    let response = harness.server.get("/api/config").await;

    assert!(!response.text().contains("secret-key-1"));
}

#[tokio::test]
async fn test_metrics_endpoint_renders() {
    let harness = TestHarness::new(&[]).await;

    harness.server.get("/metrics").await.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_route_is_404_without_static_dir() {
    let harness = TestHarness::new(&[]).await;

    harness
        .server
        .get("/does-not-exist")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
