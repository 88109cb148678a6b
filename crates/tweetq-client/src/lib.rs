//! # tweetq-client -- Typed Rust client for the tweet search API
//!
//! Provides typed, validated access to `GET search/tweets.json`:
//! - **Validation** of every [`tweetq_core::SearchParameters`] value before
//!   a request is built (see [`tweetq_core::SearchQueryValidator`]).
//! - **Query generation** mapping parameters to request fields
//!   ([`query::SearchQueryGenerator`]).
//! - **Paging** through results with `max_id` until the requested number of
//!   tweets is collected ([`search::SearchClient::search_tweets`]).
//!
//! ## Authentication
//!
//! Requests carry an application-only `Authorization: Bearer` header built
//! from [`SearchApiConfig::bearer_token`]. OAuth 1.0a user signing is out of
//! scope.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub(crate) mod retry;
pub mod search;

pub use config::SearchApiConfig;
pub use error::SearchApiError;
pub use models::{SearchMetadata, SearchResponse, Tweet, TweetUser};
pub use search::SearchClient;

use std::time::Duration;

/// Top-level API client. Holds sub-clients for each endpoint family.
#[derive(Debug, Clone)]
pub struct TweetqClient {
    search: SearchClient,
}

impl TweetqClient {
    /// Create a new client from configuration.
    pub fn new(config: SearchApiConfig) -> Result<Self, SearchApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                let mut auth = reqwest::header::HeaderValue::from_str(&format!(
                    "Bearer {}",
                    config.bearer_token.as_str()
                ))
                .map_err(|_| SearchApiError::Config(config::ConfigError::InvalidToken))?;
                auth.set_sensitive(true);
                headers.insert(reqwest::header::AUTHORIZATION, auth);
                headers
            })
            .build()
            .map_err(|e| SearchApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        tracing::debug!(api_url = %config.api_url, page_size = config.page_size, "search API client initialized");

        Ok(Self {
            search: SearchClient::new(http, config.api_url, config.page_size),
        })
    }

    /// Access the search client.
    pub fn search(&self) -> &SearchClient {
        &self.search
    }
}
