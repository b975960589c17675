//! Avatar image proxy
//!
//! Relays the onboarding image search to waifu.im so the browser never
//! talks to it directly.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    waifu::{ImageResponse, ImageSearchRequest},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/generate-image",
    tag = "Images",
    request_body = ImageSearchRequest,
    responses(
        (status = 200, description = "First matching image", body = ImageResponse),
        (status = 404, description = "No image matched", body = ErrorResponse),
        (status = 502, description = "Image API failed", body = ErrorResponse)
    )
)]
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<ImageResponse>> {
    let request: ImageSearchRequest = if body.is_empty() {
        ImageSearchRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?
    };

    let tags = request.effective_tags();
    info!(tags = ?tags, is_nsfw = request.is_nsfw, "Searching avatar image");

    let image = state.waifu_client.search(&tags, request.is_nsfw).await?;
    Ok(Json(image))
}
