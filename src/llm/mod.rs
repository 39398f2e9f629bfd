//! LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities — clone them freely.
//! Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency;
//! `complete` is an `async fn` on the enum so callers need no trait-object
//! machinery.

pub mod providers;

use thiserror::Error;

use crate::config::LlmConfig;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Request / response ────────────────────────────────────────────────────────

/// One completion request: a system prompt shaping behavior, the user's
/// query, and the document text the answer should be grounded in.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_query: String,
    pub document_text: String,
    /// Model override; `None` means the provider's configured default.
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
///
/// Adding a backend = new module + new variant + new `complete` arm.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
}

impl LlmProvider {
    /// Build the provider named in config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, ProviderError> {
        match config.provider.as_str() {
            "dummy" => Ok(LlmProvider::Dummy(providers::dummy::DummyProvider)),
            other => Err(ProviderError::UnknownProvider(other.to_string())),
        }
    }

    /// Run `request` against the provider and return its reply.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.complete(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llm_config(provider: &str) -> LlmConfig {
        LlmConfig { provider: provider.into() }
    }

    #[test]
    fn dummy_provider_builds_from_config() {
        assert!(LlmProvider::from_config(&llm_config("dummy")).is_ok());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = LlmProvider::from_config(&llm_config("openai")).unwrap_err();
        assert!(err.to_string().contains("unknown provider: openai"));
    }
}
