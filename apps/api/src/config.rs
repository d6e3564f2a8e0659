use anyhow::{Context, Result};

/// Model used when `LLM_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "zai-org/GLM-5-FP8";

/// Application configuration loaded from environment variables.
///
/// Provider and Content Service settings are optional here: a missing value
/// makes the corresponding outbound call fail at request time, never at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_base_url: Option<String>,
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_base_url: optional_env("LLM_BASE_URL"),
            llm_api_key: optional_env("LLM_API_KEY"),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            supabase_url: optional_env("SUPABASE_URL"),
            supabase_anon_key: optional_env("SUPABASE_ANON_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads `key`, treating an empty or blank value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
