//! Application-wide error types.
//!
//! [`AppError`] covers bootstrap and server-lifecycle failures; [`ApiError`]
//! is the HTTP-facing taxonomy and knows how to render itself as a JSON
//! error body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::llm::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// ── API errors ────────────────────────────────────────────────────────────────

/// Errors a request handler can surface to an HTTP caller.
///
/// The body shape is `{"error": <code>, "message": <text>}` for every
/// variant, so clients branch on `error` without parsing prose.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced agent or proceeding does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The LLM provider rejected or failed the completion request.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::Provider(_) => "provider",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.code(), "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}
