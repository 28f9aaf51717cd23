use anyhow::{Context, Result};

/// Placeholder values that signal "no real credential". The editor ships
/// with `your-openai-api-key` in its sample env file, so treat it the same
/// as an unset variable.
const PLACEHOLDER_API_KEYS: &[&str] = &["", "your-openai-api-key"];

/// Application configuration loaded from environment variables.
///
/// `OPENAI_API_KEY` is deliberately optional: without a usable credential the
/// service runs in offline mode and serves template stories.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !is_placeholder(key));

        Ok(Config {
            openai_api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn is_placeholder(key: &str) -> bool {
    PLACEHOLDER_API_KEYS.contains(&key.trim())
}
