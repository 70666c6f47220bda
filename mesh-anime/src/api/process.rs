//! Processing endpoint
//!
//! Validation happens synchronously; classification runs in a background
//! task that reports through the callback URL.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use mesh_common::api::{ProcessRequest, ProcessResponse};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub const MISSING_FIELDS_ERROR: &str = "Missing required fields";

/// POST /process
///
/// Returns `accepted` once the background task is spawned. A missing
/// required field is `rejected` and no callback follows; a body that is not
/// a JSON request object is a 400.
pub async fn process(
    State(state): State<AppState>,
    body: Result<Json<ProcessRequest>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(request) = body.map_err(|e| {
        warn!(error = %e, "Rejected unreadable process request");
        ApiError::BadRequest(format!("Invalid request body: {}", e.body_text()))
    })?;

    let missing = request.missing_required_fields();
    if !missing.is_empty() {
        warn!(task_id = %request.task_id, ?missing, "Rejected process request");
        return Err(ApiError::Rejected(MISSING_FIELDS_ERROR.to_string()));
    }

    info!(
        task_id = %request.task_id,
        cid = %request.cid,
        file_path = %request.file_path,
        "Process request accepted"
    );

    let tasks = state.tasks.clone();
    tasks.spawn(crate::pipeline::run_request(state, request));

    Ok(Json(ProcessResponse::accepted()))
}

pub fn process_routes() -> Router<AppState> {
    Router::new().route("/process", post(process))
}
