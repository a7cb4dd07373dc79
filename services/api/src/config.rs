//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub model_api_key: Option<String>,
    pub model_api_base: String,
    pub plan_model: String,
    pub plan_temperature: f32,
    pub cors_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server Settings ---
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:8501".to_string());

        // --- Model Settings ---
        // Groq serves an OpenAI-compatible API, so the same client talks to either.
        let model_api_key = lookup("GROQ_API_KEY").filter(|key| !key.trim().is_empty());
        let model_api_base = lookup("MODEL_API_BASE")
            .unwrap_or_else(|| "https://api.groq.com/openai/v1".to_string());
        let plan_model =
            lookup("PLAN_MODEL").unwrap_or_else(|| "llama-3.1-8b-instant".to_string());

        let plan_temperature = match lookup("PLAN_TEMPERATURE") {
            Some(raw) => raw.parse::<f32>().map_err(|e| {
                ConfigError::InvalidValue("PLAN_TEMPERATURE".to_string(), e.to_string())
            })?,
            None => 0.3,
        };
        if !(0.0..=2.0).contains(&plan_temperature) {
            return Err(ConfigError::InvalidValue(
                "PLAN_TEMPERATURE".to_string(),
                format!("{} is outside 0.0..=2.0", plan_temperature),
            ));
        }

        Ok(Self {
            bind_address,
            log_level,
            model_api_key,
            model_api_base,
            plan_model,
            plan_temperature,
            cors_origin,
        })
    }

    /// The model API key, required before the service can start.
    pub fn require_model_api_key(&self) -> Result<&str, ConfigError> {
        self.model_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar("GROQ_API_KEY".to_string()))
    }
}
