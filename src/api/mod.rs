//! Axum-based HTTP surface — routing table and server loop.
//!
//! `serve()` drives the axum event loop; a [`CancellationToken`] is wired
//! to axum's graceful shutdown so Ctrl-C drains in-flight requests.
//!
//! ## URL layout
//!
//! ```text
//! GET  /health
//! GET  /agents
//! GET  /agents/{agent_id}
//! GET  /proceedings/{jurisdiction_id}/{proceeding_number}/summary
//! POST /proceedings/{jurisdiction_id}/{proceeding_number}/chat
//! ```

mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::AppError;
use crate::proceedings::ProceedingsService;

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone — the service is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub proceedings: Arc<ProceedingsService>,
}

impl AppState {
    pub fn new(proceedings: ProceedingsService) -> Self {
        Self { proceedings: Arc::new(proceedings) }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/agents", get(handlers::list_agents))
        .route("/agents/{agent_id}", get(handlers::get_agent))
        .route(
            "/proceedings/{jurisdiction_id}/{proceeding_number}/summary",
            get(handlers::summary),
        )
        .route(
            "/proceedings/{jurisdiction_id}/{proceeding_number}/chat",
            post(handlers::chat),
        )
        .with_state(state)
}

// ── Server loop ───────────────────────────────────────────────────────────────

pub async fn serve(
    bind_addr: &str,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let router = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "http server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("server error: {e}")))?;

    info!("http server shut down");
    Ok(())
}
