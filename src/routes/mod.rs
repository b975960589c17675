//! HTTP routes for the companion relay
//!
//! This module defines all HTTP endpoints exposed by the relay.

pub mod chat;
pub mod client_config;
pub mod docs;
pub mod health;
pub mod image;
pub mod metrics;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/config", get(client_config::client_config))
        .route("/api/health", get(health::api_health))
        .route("/api/generate-image", post(image::generate_image))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    let mut router = Router::new()
        .merge(api_routes)
        .merge(docs::create_docs_router(state.config.docs_api_key.clone()));

    // Front end bundle; unknown paths get index.html so client-side routing works
    if let Some(dir) = &state.config.static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router
        // Global middleware (applied to all routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
