//! Manifest endpoint

use axum::{extract::State, routing::get, Json, Router};
use mesh_common::api::PluginManifest;

use crate::AppState;

/// GET /manifest
pub async fn get_manifest(State(state): State<AppState>) -> Json<PluginManifest> {
    Json(crate::manifest::manifest(state.settings.request_timeout))
}

pub fn manifest_routes() -> Router<AppState> {
    Router::new().route("/manifest", get(get_manifest))
}
