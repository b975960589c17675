//! OpenAPI specification for the relay API
//!
//! Aggregates all endpoints and schemas into a single OpenAPI document.

use utoipa::OpenApi;

use crate::{
    error::{ErrorBody, ErrorResponse},
    relay::{ConversationTurn, GenerationOverrides, Part, Role},
    routes::{
        chat::{ChatFallbackResponse, ChatRequest, ChatResponse},
        client_config::ClientConfigResponse,
        health::{ApiHealthResponse, HealthStatus, SimpleHealthResponse},
    },
    waifu::{ImageResponse, ImageSearchRequest},
};

/// OpenAPI specification for the companion relay
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Companion Relay API",
        version = "1.0.0",
        description = "Chat relay with key-rotating Gemini failover and avatar image search"
    ),
    paths(
        crate::routes::chat::chat,
        crate::routes::client_config::client_config,
        crate::routes::health::api_health,
        crate::routes::image::generate_image,
    ),
    components(
        schemas(
            // Conversation
            Role,
            Part,
            ConversationTurn,
            GenerationOverrides,
            // Chat
            ChatRequest,
            ChatResponse,
            ChatFallbackResponse,
            // Config & health
            ClientConfigResponse,
            ApiHealthResponse,
            HealthStatus,
            SimpleHealthResponse,
            // Images
            ImageSearchRequest,
            ImageResponse,
            // Error
            ErrorBody,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Chat", description = "Companion chat"),
        (name = "Config", description = "Front end feature flags"),
        (name = "Health", description = "Status endpoints"),
        (name = "Images", description = "Avatar image search")
    )
)]
pub struct RelayApiDoc;
