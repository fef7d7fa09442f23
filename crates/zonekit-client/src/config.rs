//! Client configuration.

use std::time::Duration;

/// Environment variable overriding the service base URL.
pub const API_URL_ENV: &str = "ZONEKIT_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:5177/api";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the registry service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash
    /// (e.g. `http://localhost:5177/api`).
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ApiConfig {
    /// Creates a configuration for the given base URL with the default
    /// timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Builds a configuration from the environment, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
