//! Response types for `GET search/tweets.json`.
//!
//! Fields use `#[serde(default)]` for resilience against schema evolution;
//! `deny_unknown_fields` is intentionally not used.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tweetq_core::Language;

/// `created_at` format used by the v1.1 API (`Wed Oct 10 20:19:24 +0000 2018`).
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// A single search response page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub statuses: Vec<Tweet>,
    #[serde(default)]
    pub search_metadata: Option<SearchMetadata>,
}

impl SearchResponse {
    /// Whether the endpoint advertised a further page.
    pub fn has_next_page(&self) -> bool {
        self.search_metadata
            .as_ref()
            .is_some_and(|m| m.next_results.as_deref().is_some_and(|n| !n.is_empty()))
    }

    /// Lowest tweet ID on this page, used to request the next one.
    pub fn min_id(&self) -> Option<u64> {
        self.statuses.iter().map(|t| t.id).min()
    }
}

/// Paging metadata returned alongside the statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub completed_in: Option<f64>,
    #[serde(default)]
    pub max_id: Option<u64>,
    #[serde(default)]
    pub since_id: Option<u64>,
    /// Query string of the next page, e.g. `?max_id=...&q=...`.
    #[serde(default)]
    pub next_results: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// A tweet as returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub id: u64,
    #[serde(default)]
    pub id_str: Option<String>,
    /// Tweet body. Requests use `tweet_mode=extended`, so the API sends
    /// `full_text`.
    #[serde(default, alias = "full_text")]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub lang: Language,
    #[serde(default)]
    pub user: Option<TweetUser>,
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub favorite_count: u64,
}

impl Tweet {
    /// Parse `created_at` into a UTC timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        DateTime::parse_from_str(raw, CREATED_AT_FORMAT)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Author of a tweet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetUser {
    pub id: u64,
    #[serde(default)]
    pub screen_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub verified: bool,
}
