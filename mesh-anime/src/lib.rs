//! mesh-anime library interface
//!
//! Exposes the detector core, the processing pipeline and the router for
//! integration testing.

pub mod api;
pub mod config;
pub mod detection;
pub mod error;
pub mod manifest;
pub mod pipeline;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_util::task::TaskTracker;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::detection::KeywordSet;

/// Application state shared across handlers and background tasks
#[derive(Clone)]
pub struct AppState {
    /// Filename keywords, built once at startup
    pub keywords: Arc<KeywordSet>,
    /// Pooled client for meta-core and callback calls (timeout preset)
    pub http_client: reqwest::Client,
    pub settings: Arc<Settings>,
    /// Reported by /health; set once listening, cleared on shutdown
    pub ready: Arc<AtomicBool>,
    /// Background processing tasks, drained on shutdown
    pub tasks: TaskTracker,
}

impl AppState {
    pub fn new(settings: Settings) -> mesh_common::Result<Self> {
        let keywords = KeywordSet::with_extra(settings.extra_keywords.iter().cloned());
        let http_client = mesh_common::meta_core::build_http_client(settings.request_timeout)?;

        Ok(Self {
            keywords: Arc::new(keywords),
            http_client,
            settings: Arc::new(settings),
            ready: Arc::new(AtomicBool::new(false)),
            tasks: TaskTracker::new(),
        })
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Wait for running background tasks
    ///
    /// Every task ends by sending its callback, and every outbound call
    /// carries the request timeout, so this terminates.
    pub async fn drain_tasks(&self) {
        self.tasks.close();
        self.tasks.wait().await;
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::manifest_routes())
        .merge(api::configure_routes())
        .merge(api::process_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
