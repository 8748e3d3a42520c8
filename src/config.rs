use thiserror::Error;

pub const API_KEY_VAR: &str = "TAVILY_API_KEY";
pub const API_URL_VAR: &str = "TAVILY_API_URL";
const DEFAULT_API_URL: &str = "https://api.tavily.com/search";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TAVILY_API_KEY not found in environment variables")]
    MissingApiKey,
}

/// Settings read once at startup and handed to the runner.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let api_url = non_blank(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Config { api_key, api_url })
    }
}

/// Load `.env` into the process environment if one exists.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {
            tracing::warn!(".env file not found. Make sure {} is set.", API_KEY_VAR)
        }
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }
}
