//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies `BERNARDO_BIND` and `BERNARDO_LOG_LEVEL` env overrides.
//! A missing file is not an error — the hardcoded defaults are enough to
//! run the backend with the dummy provider.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the listener binds to.
    pub bind: String,
}

/// LLM subsystem configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider is active (only `"dummy"` exists today).
    /// Maps to `default` in `[llm]` TOML — named `default` there to signal
    /// that other provider sections can coexist without being loaded.
    /// Models are fixed per agent profile, not configured here.
    pub provider: String,
}

/// Fully-resolved backend configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub log_level: String,
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

// ── Raw TOML shape ────────────────────────────────────────────────────────────

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    server: RawServer,
    #[serde(default)]
    llm: RawLlm,
}

#[derive(Deserialize)]
struct RawServer {
    #[serde(default = "default_app_name")]
    name: String,
    #[serde(default = "default_bind")]
    bind: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for RawServer {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            bind: default_bind(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Deserialize)]
struct RawLlm {
    /// Maps to `default = "..."` in `[llm]`.
    #[serde(rename = "default", default = "default_llm_provider")]
    provider: String,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_llm_provider() }
    }
}

fn default_app_name() -> String {
    "bernardo".to_string()
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_provider() -> String {
    "dummy".to_string()
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load config from `config/default.toml`, then apply env-var overrides.
/// When the file does not exist, the hardcoded defaults are used.
pub fn load() -> Result<Config, AppError> {
    let bind_override = env::var("BERNARDO_BIND").ok();
    let log_level_override = env::var("BERNARDO_LOG_LEVEL").ok();
    load_from(
        Path::new("config/default.toml"),
        bind_override.as_deref(),
        log_level_override.as_deref(),
    )
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    bind_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let parsed: RawConfig = if path.exists() {
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?
    } else {
        RawConfig::default()
    };

    let bind = bind_override.unwrap_or(&parsed.server.bind).to_string();
    let log_level = log_level_override
        .unwrap_or(&parsed.server.log_level)
        .to_string();

    Ok(Config {
        app_name: parsed.server.name,
        log_level,
        server: ServerConfig { bind },
        llm: LlmConfig { provider: parsed.llm.provider },
    })
}
