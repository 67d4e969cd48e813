//! Error types for cinekit
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The taxonomy splits into transient failures (connectivity, rate
//! limiting, 5xx responses) that the retry policy may replay, and
//! permanent failures (decoding, store, config, cancellation) that it
//! must propagate immediately. `Error::is_retryable` is the single
//! classification point consumed by [`crate::retry::RetryPolicy`].

use thiserror::Error;

/// The main error type for cinekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Connectivity Errors (retryable)
    // ============================================================================
    #[error("Network is offline")]
    Offline,

    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Connection lost: {message}")]
    ConnectionLost { message: String },

    #[error("DNS resolution failed: {message}")]
    Dns { message: String },

    #[error("TLS negotiation failed: {message}")]
    Tls { message: String },

    #[error("Rate limited{}", retry_after_fmt(.retry_after_seconds))]
    RateLimited { retry_after_seconds: Option<u64> },

    // ============================================================================
    // Server Errors (retryable for 5xx only)
    // ============================================================================
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// Transport failure reqwest could not classify further
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    // ============================================================================
    // Data Errors (non-retryable)
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Store error: {message}")]
    Store { message: String },

    // ============================================================================
    // Configuration Errors (non-retryable)
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors (non-retryable)
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors (non-retryable)
    // ============================================================================
    #[error("Operation cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

fn retry_after_fmt(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(", retry after {secs}s"),
        None => String::new(),
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a server error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a rate-limited error with an optional server-advised delay
    pub fn rate_limited(retry_after_seconds: Option<u64>) -> Self {
        Self::RateLimited {
            retry_after_seconds,
        }
    }

    /// Classify a transport-level failure from reqwest into the taxonomy.
    ///
    /// Timeouts and connection failures become their dedicated retryable
    /// variants; response-body decode failures become permanent decode
    /// errors; anything else stays wrapped as [`Error::Http`], which the
    /// retry policy also treats as transient.
    pub fn from_transport(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            return Self::Timeout { timeout_ms };
        }
        if err.is_connect() {
            return Self::ConnectionLost {
                message: err.to_string(),
            };
        }
        if err.is_decode() {
            return Self::Decode {
                message: err.to_string(),
            };
        }
        Self::Http(err)
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Offline
            | Error::Timeout { .. }
            | Error::ConnectionLost { .. }
            | Error::Dns { .. }
            | Error::Tls { .. }
            | Error::RateLimited { .. }
            | Error::Http(_) => true,
            Error::Server { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }
}

/// Result type alias for cinekit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
