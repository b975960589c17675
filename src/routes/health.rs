//! Health check endpoints
//!
//! - `/api/health` - Status report consumed by the browser front end
//! - `/health/live` - Liveness probe

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;

/// Health status enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Status report for the front end
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealthResponse {
    /// Always `ok` while the process serves requests
    pub status: String,
    /// Server time, RFC 3339
    pub time: String,
    /// Number of configured Gemini credentials
    pub gemini_keys: usize,
    pub waifu_api: bool,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Simple health response for liveness
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SimpleHealthResponse {
    pub status: HealthStatus,
}

/// Front end health endpoint
///
/// An empty credential pool is a valid configuration, so this never
/// reports failure on its own.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Relay status", body = ApiHealthResponse))
)]
pub async fn api_health(State(state): State<Arc<AppState>>) -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "ok".to_string(),
        time: chrono::Utc::now().to_rfc3339(),
        gemini_keys: state.relay.credential_count(),
        waifu_api: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Liveness probe endpoint
///
/// Returns 200 OK if the application is alive.
pub async fn liveness_check() -> (StatusCode, Json<SimpleHealthResponse>) {
    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}
