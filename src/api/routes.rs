use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use super::handlers::{health_check, match_commands};
use super::openapi::ApiDoc;

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/match", post(match_commands))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
}
