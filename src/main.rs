//! Bernardo — legal-proceeding analysis API entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at the configured level
//!   4. Build the session store, LLM provider, and proceedings service
//!   5. Spawn Ctrl-C → shutdown signal watcher
//!   6. Serve HTTP until the token cancels

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use bernardo::api::{self, AppState};
use bernardo::config;
use bernardo::error::AppError;
use bernardo::llm::LlmProvider;
use bernardo::logger;
use bernardo::proceedings::ProceedingsService;
use bernardo::session::SessionStore;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;

    logger::init(&config.log_level)?;

    info!(
        app_name = %config.app_name,
        bind = %config.server.bind,
        log_level = %config.log_level,
        llm_provider = %config.llm.provider,
        "config loaded"
    );

    let sessions = Arc::new(SessionStore::new());
    let llm = LlmProvider::from_config(&config.llm)
        .map_err(|e| AppError::Config(e.to_string()))?;
    let state = AppState::new(ProceedingsService::new(sessions, llm));

    // Shared shutdown token — Ctrl-C cancels it, the server drains and exits.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    api::serve(&config.server.bind, state, shutdown).await
}
