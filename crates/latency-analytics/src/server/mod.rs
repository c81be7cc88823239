//! HTTP surface of the analytics endpoint.

pub mod handler;
pub mod middleware;

use crate::settings::Settings;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
};
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const HEALTH_PATH: &str = "/health";

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub data_file: Arc<PathBuf>,
    pub default_threshold_ms: f64,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            data_file: Arc::new(settings.data_file.clone()),
            default_threshold_ms: settings.default_threshold_ms,
        }
    }
}

/// Build the router. CORS headers are applied outermost so every response,
/// including errors and fallbacks, carries them.
pub fn router(settings: &Settings) -> Router {
    Router::new()
        .route(
            &settings.endpoint_path,
            post(handler::analytics).options(handler::preflight),
        )
        .route(HEALTH_PATH, get(handler::health))
        .with_state(AppState::new(settings))
        .layer(DefaultBodyLimit::max(settings.max_body_bytes))
        .layer(from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(middleware::cors_headers))
}

/// Serve until `shutdown` is cancelled, then drain in-flight requests.
pub async fn serve(settings: &Settings, shutdown: CancellationToken) -> Result<()> {
    let app = router(settings);

    let listener = TcpListener::bind(settings.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.listen_addr))?;

    info!(
        addr = %listener.local_addr()?,
        endpoint = %settings.endpoint_path,
        data_file = %settings.data_file.display(),
        "latency analytics listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("HTTP server exited with error")?;

    Ok(())
}
