//! # Search Parameters
//!
//! [`SearchParameters`] describes a single tweet search. The value is built
//! by the caller, checked by [`crate::SearchQueryValidator`], turned into a
//! query string by the client, and dropped once the request is issued.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::filters::SearchFilters;
use crate::geo::GeoCode;
use crate::language::Language;

/// Default number of tweets a search returns.
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Which tweets the endpoint should favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
    /// Both popular and real-time results.
    #[default]
    Mixed,
    /// Most recent results only.
    Recent,
    /// Most popular results only.
    Popular,
}

impl SearchResultType {
    /// Value of the `result_type` request parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Recent => "recent",
            Self::Popular => "popular",
        }
    }
}

impl std::fmt::Display for SearchResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchResultType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" => Ok(Self::Mixed),
            "recent" => Ok(Self::Recent),
            "popular" => Ok(Self::Popular),
            _ => Err(ValidationError::UnknownResultType(s.to_string())),
        }
    }
}

/// Parameters of a tweet search.
///
/// Every field is optional from the endpoint's point of view; whether a
/// particular combination is worth sending is decided by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Free-text search term.
    #[serde(default)]
    pub query: Option<String>,
    /// Restrict results to a radius around a point.
    #[serde(default)]
    pub geo_code: Option<GeoCode>,
    /// Language of the query itself (only `ja` is meaningful upstream).
    #[serde(default)]
    pub locale: Option<String>,
    /// Restrict results to tweets in this language.
    #[serde(default)]
    pub language: Language,
    /// Only tweets created before this date.
    #[serde(default)]
    pub until: Option<DateTime<Utc>>,
    /// Only tweets created on or after this date.
    #[serde(default)]
    pub since: Option<DateTime<Utc>>,
    /// Only tweets with an ID greater than this one.
    #[serde(default)]
    pub since_id: Option<u64>,
    /// Only tweets with an ID less than or equal to this one.
    #[serde(default)]
    pub max_id: Option<u64>,
    /// Popular, recent or mixed results.
    #[serde(default)]
    pub result_type: SearchResultType,
    /// Result-category filters appended to the query as `filter:` operators.
    #[serde(default)]
    pub filters: SearchFilters,
    /// Total number of tweets to collect across pages.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Ask for the `entities` node on each tweet.
    #[serde(default = "default_include_entities")]
    pub include_entities: bool,
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_include_entities() -> bool {
    true
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            query: None,
            geo_code: None,
            locale: None,
            language: Language::Undefined,
            until: None,
            since: None,
            since_id: None,
            max_id: None,
            result_type: SearchResultType::Mixed,
            filters: SearchFilters::NONE,
            max_results: DEFAULT_MAX_RESULTS,
            include_entities: true,
        }
    }
}

impl SearchParameters {
    /// Search for a free-text query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Search everything posted around a location.
    pub fn from_geo_code(geo_code: GeoCode) -> Self {
        Self {
            geo_code: Some(geo_code),
            ..Self::default()
        }
    }

    /// Restrict the search to a location.
    pub fn with_geo_code(mut self, geo_code: GeoCode) -> Self {
        self.geo_code = Some(geo_code);
        self
    }

    /// Set the query locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Restrict results to a language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Only return tweets created before `until`.
    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Only return tweets created on or after `since`.
    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Only return tweets newer than `since_id`.
    pub fn with_since_id(mut self, since_id: u64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    /// Only return tweets at or below `max_id`.
    pub fn with_max_id(mut self, max_id: u64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    /// Choose popular, recent or mixed results.
    pub fn with_result_type(mut self, result_type: SearchResultType) -> Self {
        self.result_type = result_type;
        self
    }

    /// Add filter flags to the ones already set.
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters |= filters;
        self
    }

    /// Cap the total number of tweets collected.
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Toggle the `entities` node on returned tweets.
    pub fn with_include_entities(mut self, include_entities: bool) -> Self {
        self.include_entities = include_entities;
        self
    }
}
