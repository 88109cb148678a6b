//! Search API client error types.

use tweetq_core::ValidationError;

/// Errors from search API calls.
#[derive(Debug, thiserror::Error)]
pub enum SearchApiError {
    /// The parameters were rejected locally; no request was sent.
    #[error("invalid search parameters: {0}")]
    InvalidParameters(#[from] ValidationError),
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The search API returned a non-2xx status.
    #[error("search API {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl SearchApiError {
    /// Whether the request was stopped before reaching the network.
    pub fn is_rejected_locally(&self) -> bool {
        matches!(self, Self::InvalidParameters(_) | Self::Config(_))
    }
}
