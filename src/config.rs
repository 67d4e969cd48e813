//! Client configuration
//!
//! [`CatalogConfig`] covers everything needed to talk to a TMDB-style
//! catalog API: endpoint and credentials, HTTP behavior, and the retry
//! budget applied by the repository layer. Loadable from a JSON file or
//! from `CINEKIT_*` environment variables.

use crate::error::{Error, Result};
use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default catalog endpoint (TMDB v3)
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

// ============================================================================
// Catalog Config
// ============================================================================

/// Complete configuration for a catalog client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent with every request
    pub api_key: String,

    /// BCP 47 language tag for localized responses
    #[serde(default = "default_language")]
    pub language: String,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Retry settings applied by repositories
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

impl CatalogConfig {
    /// Create a config with defaults for everything but the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            language: default_language(),
            http: HttpConfig::default(),
            retry: RetryConfig::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `CINEKIT_*` environment variables.
    ///
    /// `CINEKIT_API_KEY` is required; `CINEKIT_BASE_URL` and
    /// `CINEKIT_LANGUAGE` override their defaults.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("CINEKIT_API_KEY").map_err(|_| Error::missing_field("api_key"))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("CINEKIT_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(language) = std::env::var("CINEKIT_LANGUAGE") {
            config.language = language;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Optional client-side rate limit
    #[serde(default)]
    pub rate_limit: Option<RateLimitConfig>,
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    format!("cinekit/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            rate_limit: Some(RateLimitConfig::default()),
        }
    }
}

impl HttpConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Token-bucket rate limit settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum number of requests per second
    #[serde(default = "default_rps")]
    pub requests_per_second: u32,

    /// Burst size (max tokens in the bucket)
    #[serde(default = "default_burst")]
    pub burst_size: u32,
}

fn default_rps() -> u32 {
    10
}

fn default_burst() -> u32 {
    10
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_rps(),
            burst_size: default_burst(),
        }
    }
}

// ============================================================================
// Retry Config
// ============================================================================

/// Retry settings, convertible into a [`RetryPolicy`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Additional attempts after the first failure
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Multiplier applied to the delay after each retry
    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: f64,

    /// Jitter window in milliseconds
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,
}

fn default_max_retries() -> u32 {
    2
}

fn default_initial_delay_ms() -> u64 {
    500
}

fn default_backoff_factor() -> f64 {
    2.0
}

fn default_jitter_ms() -> u64 {
    100
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            backoff_factor: default_backoff_factor(),
            jitter_ms: default_jitter_ms(),
        }
    }
}

impl RetryConfig {
    /// Build the runtime policy from these settings
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            backoff_factor: self.backoff_factor,
            jitter: Duration::from_millis(self.jitter_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_defaults() {
        let config = CatalogConfig::new("secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.language, "en-US");
        assert_eq!(config.http.timeout_ms, 30_000);
        assert_eq!(config.retry.max_retries, 2);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_missing_api_key() {
        let config = CatalogConfig::new("  ");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = CatalogConfig::new("secret");
        config.base_url = "not a url".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_minimal_json_deserializes_with_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{"api_key": "secret"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.language, "en-US");
        assert!(config.http.rate_limit.is_some());
    }

    #[test]
    fn test_full_json_round_trip() {
        let json = r#"{
            "base_url": "https://api.example.com/v3",
            "api_key": "secret",
            "language": "de-DE",
            "http": { "timeout_ms": 5000, "user_agent": "test", "rate_limit": null },
            "retry": { "max_retries": 5, "initial_delay_ms": 100, "backoff_factor": 1.5, "jitter_ms": 0 }
        }"#;
        let config: CatalogConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.http.timeout_ms, 5000);
        assert!(config.http.rate_limit.is_none());

        let policy = config.retry.policy();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.initial_delay, Duration::from_millis(100));
        assert_eq!(policy.jitter, Duration::ZERO);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_key": "from-file"}"#).unwrap();

        let config = CatalogConfig::from_file(&path).unwrap();
        assert_eq!(config.api_key, "from-file");
    }
}
