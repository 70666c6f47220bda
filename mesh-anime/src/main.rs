//! mesh-anime - Anime detector plugin
//!
//! Classifies video files as anime from path, filename, title script and
//! stream languages, then writes the verdict to meta-core and reports back
//! through the task callback.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mesh_anime::config::{CliArgs, DetectorToml, Settings, MODULE_NAME};
use mesh_anime::{build_router, AppState};
use mesh_common::config::{load_toml_config, resolve_config_path};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Config file first so its log level can seed the filter
    let config_path = resolve_config_path(args.config.as_deref(), "MESH_ANIME_CONFIG", MODULE_NAME);
    let toml: DetectorToml = load_toml_config(config_path.as_deref())
        .context("Failed to load configuration")?;
    let settings = Settings::resolve(&args, toml);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!(
                        "mesh_anime={0},mesh_common={0},tower_http=info",
                        settings.log_level
                    )
                    .into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification immediately after tracing init
    info!(
        "Starting MetaMesh Anime Detector (mesh-anime) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &config_path {
        Some(path) if path.exists() => info!("Config file: {}", path.display()),
        Some(path) => warn!("Config file not found: {} (using defaults)", path.display()),
        None => warn!("No config file location available (using defaults)"),
    }

    let bind_address = settings.bind_address();
    let state = AppState::new(settings).context("Failed to initialize application state")?;
    info!(
        keywords = state.keywords.len(),
        write_mode = ?state.settings.write_mode,
        timeout_secs = state.settings.request_timeout.as_secs(),
        "Detector initialized"
    );

    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;
    state.set_ready(true);
    info!("Listening on http://{}", bind_address);
    info!("Health check: http://{}/health", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state.clone()))
        .await
        .context("Server error")?;

    if !state.tasks.is_empty() {
        info!(pending = state.tasks.len(), "Waiting for background tasks");
    }
    state.drain_tasks().await;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
///
/// Readiness drops as soon as a signal arrives so health checks stop routing
/// work here while in-flight requests drain.
async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }

    state.set_ready(false);
}
