//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use mesh_common::api::HealthResponse;

use crate::AppState;

/// GET /health
///
/// Answers while the process is up; `ready` tells whether it accepts work.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        ready: state.is_ready(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
