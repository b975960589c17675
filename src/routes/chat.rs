//! Chat endpoint
//!
//! Forwards the browser's conversation history through the key-rotating
//! relay. When the relay fails the reply is a canned line, flagged with
//! `error: true` and a 503 so the client can tell it apart.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::{
    error::{AppError, ErrorResponse},
    fallback::fallback_response,
    relay::{validate_history, ConversationTurn, GenerationOverrides},
    routes::metrics::{record_fallback, record_request},
    AppState,
};

/// Chat request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Full conversation so far, oldest first
    #[serde(alias = "messages")]
    pub contents: Vec<ConversationTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationOverrides>,
}

/// Successful reply
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub text: String,
}

/// Reply used when no credential produced text
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatFallbackResponse {
    pub error: bool,
    /// Canned companion line to show instead of an error
    pub text: String,
}

/// Handle chat requests
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "Chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Generated reply", body = ChatResponse),
        (status = 400, description = "Malformed conversation", body = ErrorResponse),
        (status = 503, description = "No credential succeeded; canned reply attached", body = ChatFallbackResponse)
    )
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let start_time = Instant::now();

    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    validate_history(&request.contents).map_err(AppError::BadRequest)?;

    let params = state
        .config
        .generation_defaults()
        .with_overrides(request.generation_config.as_ref())
        .map_err(AppError::BadRequest)?;

    info!(
        turns = request.contents.len(),
        temperature = params.temperature,
        max_output_tokens = params.max_output_tokens,
        "Processing chat request"
    );

    match state.relay.dispatch(&request.contents, params).await {
        Ok(text) => {
            record_request("success", start_time.elapsed().as_secs_f64());
            Ok((StatusCode::OK, Json(ChatResponse { text })).into_response())
        }
        Err(error) => {
            record_request("fallback", start_time.elapsed().as_secs_f64());
            record_fallback(error.kind());
            warn!(error = %error, "Relay failed, answering with a canned reply");

            let body = ChatFallbackResponse {
                error: true,
                text: fallback_response().to_string(),
            };
            Ok((StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response())
        }
    }
}
