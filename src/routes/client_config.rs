//! Front end configuration endpoint
//!
//! Tells the browser which features are usable. Credentials themselves are
//! never sent to the client.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;

/// Feature flags for the browser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigResponse {
    pub has_gemini_keys: bool,
    pub waifu_api_available: bool,
}

#[utoipa::path(
    get,
    path = "/api/config",
    tag = "Config",
    responses((status = 200, description = "Feature flags", body = ClientConfigResponse))
)]
pub async fn client_config(State(state): State<Arc<AppState>>) -> Json<ClientConfigResponse> {
    Json(ClientConfigResponse {
        has_gemini_keys: !state.relay.pool().is_empty(),
        waifu_api_available: true,
    })
}
