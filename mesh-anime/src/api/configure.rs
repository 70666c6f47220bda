//! Configuration endpoint
//!
//! The detector has no runtime-tunable settings. Updates are acknowledged
//! and logged so the orchestrator's configure step succeeds.

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use mesh_common::api::ConfigureResponse;
use serde_json::Value;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::manifest::PLUGIN_ID;
use crate::AppState;

/// POST /configure
pub async fn configure(
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ConfigureResponse>> {
    let Json(body) = body.map_err(|e| {
        ApiError::BadRequest(format!("Invalid configuration body: {}", e.body_text()))
    })?;
    let Some(config) = body.as_object() else {
        return Err(ApiError::BadRequest(
            "Configuration must be a JSON object".to_string(),
        ));
    };

    info!(
        plugin = PLUGIN_ID,
        keys = ?config.keys().collect::<Vec<_>>(),
        "Configuration updated"
    );

    Ok(Json(ConfigureResponse {
        status: "ok".to_string(),
    }))
}

pub fn configure_routes() -> Router<AppState> {
    Router::new().route("/configure", post(configure))
}
