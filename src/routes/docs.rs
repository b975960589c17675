//! Documentation endpoints
//!
//! Serves Swagger UI and the raw OpenAPI document. When a docs key is
//! configured, requests must carry it in `X-Docs-Key`; anything else gets a
//! 404 so the endpoints stay hidden.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use crate::docs::RelayApiDoc;

/// Expected docs key, `None` meaning open access
type DocsKey = Option<Arc<str>>;

/// Middleware to protect docs endpoints with an API key
pub async fn docs_auth_middleware(
    State(expected_key): State<DocsKey>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(expected) = expected_key else {
        return Ok(next.run(request).await);
    };

    let provided_key = request
        .headers()
        .get("X-Docs-Key")
        .and_then(|v| v.to_str().ok());

    match provided_key {
        Some(provided) if provided == &*expected => Ok(next.run(request).await),
        _ => Err(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Handler for OpenAPI JSON endpoint
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(RelayApiDoc::openapi())
}

/// Handler for Swagger UI HTML
async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// Create the docs router
///
/// Routes:
/// - GET /api/docs - Swagger UI
/// - GET /api/docs/openapi.json - Raw OpenAPI spec
///
/// Generic over the parent router's state so it can be merged anywhere.
pub fn create_docs_router<S>(docs_key: Option<String>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let docs_key: DocsKey = docs_key.map(Arc::from);

    Router::new()
        .route("/api/docs", get(swagger_ui))
        .route("/api/docs/openapi.json", get(openapi_json))
        .layer(axum::middleware::from_fn_with_state(
            docs_key,
            docs_auth_middleware,
        ))
}

/// Swagger UI HTML template, assets from the unpkg CDN
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Companion Relay API - Documentation</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/api/docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;
