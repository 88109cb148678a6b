//! Search API client configuration.
//!
//! Defaults point to the production v1.1 endpoint. Override via environment
//! variables or explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Default base URL of the search API.
pub const DEFAULT_API_URL: &str = "https://api.twitter.com/1.1/";

/// Largest page the search endpoint serves.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Configuration for connecting to the search API.
///
/// Custom `Debug` implementation redacts the `bearer_token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct SearchApiConfig {
    /// Base URL; `search/tweets.json` is resolved against it.
    pub api_url: Url,
    /// Application bearer token, zeroized on drop.
    pub bearer_token: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Tweets requested per page, 1..=100.
    pub page_size: u32,
}

impl std::fmt::Debug for SearchApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchApiConfig")
            .field("api_url", &self.api_url)
            .field("bearer_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl SearchApiConfig {
    /// Create a configuration for `api_url` with default timeout and page size.
    pub fn new(api_url: Url, bearer_token: impl Into<String>) -> Self {
        Self {
            api_url: with_trailing_slash(api_url),
            bearer_token: Zeroizing::new(bearer_token.into()),
            timeout_secs: 30,
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `TWEETQ_API_URL` (default: `https://api.twitter.com/1.1/`)
    /// - `TWEETQ_BEARER_TOKEN` (required)
    /// - `TWEETQ_TIMEOUT_SECS` (default: 30)
    /// - `TWEETQ_PAGE_SIZE` (default: 100, clamped to 1..=100)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok(), true)
    }

    /// Same as [`from_env`](Self::from_env), but an absent token is left
    /// empty instead of failing. Used to preview requests without credentials.
    pub fn from_env_optional_token() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok(), false)
    }

    fn from_lookup(
        var: impl Fn(&str) -> Option<String>,
        require_token: bool,
    ) -> Result<Self, ConfigError> {
        let bearer_token = var("TWEETQ_BEARER_TOKEN").filter(|t| !t.is_empty());
        if require_token && bearer_token.is_none() {
            return Err(ConfigError::MissingToken);
        }

        let raw_url = var("TWEETQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidUrl("TWEETQ_API_URL".to_string(), e.to_string()))?;

        Ok(Self {
            api_url: with_trailing_slash(api_url),
            bearer_token: Zeroizing::new(bearer_token.unwrap_or_default()),
            timeout_secs: var("TWEETQ_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            page_size: var("TWEETQ_PAGE_SIZE")
                .and_then(|s| s.parse::<u32>().ok())
                .map_or(MAX_PAGE_SIZE, |n| n.clamp(1, MAX_PAGE_SIZE)),
        })
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be parsed
    /// (should not occur for valid port numbers, but avoids `expect()`).
    pub fn local_mock(port: u16, token: &str) -> Result<Self, ConfigError> {
        let api_url = Url::parse(&format!("http://127.0.0.1:{port}/"))
            .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?;
        Ok(Self {
            timeout_secs: 5,
            ..Self::new(api_url, token)
        })
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TWEETQ_BEARER_TOKEN environment variable is required")]
    MissingToken,
    #[error("bearer token contains characters not allowed in an HTTP header")]
    InvalidToken,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
