use anyhow::{Context, Result};

use crate::llm_client::LlmSettings;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres record store. Persisted history is disabled when unset.
    pub database_url: Option<String>,
    /// OpenAI-compatible chat-completions base URL.
    pub llm_base_url: String,
    /// API credential. Optional at boot: the check happens per request so an
    /// unconfigured service comes up and reports a configuration error
    /// instead of refusing to start.
    pub openrouter_api_key: Option<String>,
    pub llm_model: String,
    pub llm_max_tokens: u32,
    pub llm_temperature: f32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            llm_base_url: env_or("LLM_BASE_URL", "https://openrouter.ai/api/v1"),
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            llm_model: env_or("LLM_MODEL", "openai/gpt-4"),
            llm_max_tokens: env_or("LLM_MAX_TOKENS", "350")
                .parse::<u32>()
                .context("LLM_MAX_TOKENS must be a number")?,
            llm_temperature: env_or("LLM_TEMPERATURE", "0.8")
                .parse::<f32>()
                .context("LLM_TEMPERATURE must be a number")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Projects the LLM-facing fields into client construction settings.
    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            base_url: self.llm_base_url.clone(),
            api_key: self.openrouter_api_key.clone(),
            model: self.llm_model.clone(),
            max_tokens: self.llm_max_tokens,
            temperature: self.llm_temperature,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
