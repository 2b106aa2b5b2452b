// Client configuration

use std::env;

/// Environment variable holding the API base URL
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Fallback when `API_BASE_URL` is unset (backend default port)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    EmptyBaseUrl,

    #[error("API base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}

/// Settings shared by every request of a client instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Create a config for the given base URL
    ///
    /// Trailing slashes are stripped so paths can be appended as `/resource`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read the base URL from `API_BASE_URL`, falling back to
    /// [`DEFAULT_API_BASE_URL`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a resource path starting with `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
