use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::engine::EngineError;
use crate::models::{MatchReport, RawCommand};
use crate::service;

use super::responses::ErrorResponse;

/// Convert EngineError to an HTTP response
impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = match &self {
            EngineError::InvalidDecimal(_) => StatusCode::BAD_REQUEST,
            EngineError::DuplicateOrderId(_) => StatusCode::CONFLICT,
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Match a command batch
///
/// Runs the posted command array through a fresh engine and returns the
/// residual book snapshots and the trade log. The engine is single-owner,
/// so every request gets its own; nothing persists between calls.
#[utoipa::path(
    post,
    path = "/api/v1/match",
    tag = "Matching",
    request_body = Vec<RawCommand>,
    responses(
        (status = 200, description = "Command stream fully processed", body = MatchReport),
        (status = 400, description = "Unparseable decimal in a command", body = ErrorResponse),
        (status = 409, description = "Duplicate order id", body = ErrorResponse)
    )
)]
pub async fn match_commands(
    Json(commands): Json<Vec<RawCommand>>,
) -> Result<Json<MatchReport>, EngineError> {
    let report = service::process_commands(&commands)?;
    tracing::debug!(
        commands = commands.len(),
        trades = report.trades.len(),
        "matched request batch"
    );
    Ok(Json(report))
}
