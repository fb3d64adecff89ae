use anyhow::{Context, Result};

use crate::llm_client::GenerationOptions;

const DEFAULT_LLM_API_URL: &str = "https://ai-gateway.vercel.sh/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "openai/gpt-4o-mini";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub llm: LlmSettings,
}

/// Settings for the text-generation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub api_url: String,
    /// Analysis requests fail with a service error while this is unset.
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
    /// Transport attempts for 429 / 5xx responses. 1 means no retry.
    pub max_attempts: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_LLM_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_LLM_MODEL.to_string(),
            temperature: 0.7,
            max_output_tokens: 1000,
            timeout_secs: 60,
            max_attempts: 1,
        }
    }
}

impl LlmSettings {
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = LlmSettings::default();
        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm: LlmSettings {
                api_url: std::env::var("LLM_API_URL").unwrap_or(defaults.api_url),
                api_key: std::env::var("LLM_API_KEY")
                    .ok()
                    .filter(|k| !k.trim().is_empty()),
                model: std::env::var("LLM_MODEL").unwrap_or(defaults.model),
                temperature: parse_env("LLM_TEMPERATURE", defaults.temperature)?,
                max_output_tokens: parse_env("LLM_MAX_OUTPUT_TOKENS", defaults.max_output_tokens)?,
                timeout_secs: parse_env("LLM_TIMEOUT_SECS", defaults.timeout_secs)?,
                max_attempts: parse_env("LLM_MAX_ATTEMPTS", defaults.max_attempts)?,
            },
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
