//! Handlers for every route in the routing table.
//!
//! Each handler receives [`AppState`] via [`axum::extract::State`]; fallible
//! ones return `Result<Json<_>, ApiError>` and let [`ApiError`] render the
//! JSON error body.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::agents::{self, AgentInfo};
use crate::error::ApiError;

use super::AppState;

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct ChatRequest {
    message: String,
    session_id: Option<String>,
}

#[derive(Serialize)]
pub(super) struct ChatResponse {
    response: String,
    agent_id: String,
    session_id: String,
}

#[derive(Serialize)]
pub(super) struct SummaryResponse {
    summary: String,
    agent_id: String,
    session_id: String,
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /health
pub(super) async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Application is running successfully",
    }))
}

/// GET /agents
pub(super) async fn list_agents() -> Json<Vec<AgentInfo>> {
    Json(agents::list().iter().map(|a| a.info()).collect())
}

/// GET /agents/{agent_id}
pub(super) async fn get_agent(
    Path(agent_id): Path<String>,
) -> Result<Json<AgentInfo>, ApiError> {
    agents::find(&agent_id)
        .map(|a| Json(a.info()))
        .ok_or_else(|| ApiError::NotFound(format!("agent '{agent_id}' not found")))
}

/// GET /proceedings/{jurisdiction_id}/{proceeding_number}/summary
pub(super) async fn summary(
    State(state): State<AppState>,
    Path((jurisdiction_id, proceeding_number)): Path<(String, String)>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let outcome = state
        .proceedings
        .summarize(&jurisdiction_id, &proceeding_number)
        .await?;

    Ok(Json(SummaryResponse {
        summary: outcome.summary,
        agent_id: outcome.agent_id.to_string(),
        session_id: outcome.session_id,
    }))
}

/// POST /proceedings/{jurisdiction_id}/{proceeding_number}/chat
pub(super) async fn chat(
    State(state): State<AppState>,
    Path((jurisdiction_id, proceeding_number)): Path<(String, String)>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let outcome = state
        .proceedings
        .chat(&jurisdiction_id, &proceeding_number, &req.message, req.session_id)
        .await?;

    Ok(Json(ChatResponse {
        response: outcome.response,
        agent_id: outcome.agent_id.to_string(),
        session_id: outcome.session_id,
    }))
}
