//! Typed client for the tweet search endpoint.
//!
//! | Method | Path (relative to API base) | Operation |
//! |--------|-----------------------------|-----------|
//! | GET    | `search/tweets.json`        | Search tweets (single page or paged) |
//!
//! Every call validates its [`SearchParameters`] before building the request;
//! a rejected parameter set never reaches the network.

use tweetq_core::{SearchParameters, SearchQueryValidator};
use url::Url;

use crate::error::SearchApiError;
use crate::models::{SearchResponse, Tweet};
use crate::query::{search_url, SearchQueryGenerator};

const ENDPOINT: &str = "GET /search/tweets.json";

/// Client for the search API.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    api_url: Url,
    page_size: u32,
    generator: SearchQueryGenerator,
}

impl SearchClient {
    pub(crate) fn new(http: reqwest::Client, api_url: Url, page_size: u32) -> Self {
        Self {
            http,
            api_url,
            page_size,
            generator: SearchQueryGenerator::new(SearchQueryValidator::new()),
        }
    }

    /// The validator gating every request.
    pub fn validator(&self) -> &SearchQueryValidator {
        self.generator.validator()
    }

    /// Build the request URL for a single page without sending it.
    pub fn request_url(&self, params: &SearchParameters) -> Result<Url, SearchApiError> {
        let pairs = self.generator.generate(params, self.page_size)?;
        search_url(&self.api_url, &pairs).map_err(|e| {
            SearchApiError::Config(crate::config::ConfigError::InvalidUrl(
                "api_url".into(),
                e.to_string(),
            ))
        })
    }

    /// Fetch a single page of results.
    ///
    /// Calls `GET {api_url}/search/tweets.json`.
    pub async fn search_page(
        &self,
        params: &SearchParameters,
    ) -> Result<SearchResponse, SearchApiError> {
        let url = self.request_url(params)?;
        tracing::debug!(endpoint = ENDPOINT, %url, "sending search request");

        let resp = crate::retry::retry_send(ENDPOINT, || self.http.get(url.clone()).send())
            .await
            .map_err(|e| SearchApiError::Http {
                endpoint: ENDPOINT.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchApiError::ApiError {
                endpoint: ENDPOINT.into(),
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| SearchApiError::Deserialization {
            endpoint: ENDPOINT.into(),
            source: e,
        })
    }

    /// Collect up to `params.max_results` tweets, paging backwards through
    /// the timeline with `max_id`.
    ///
    /// Stops early when a page is empty or the endpoint advertises no
    /// further page.
    pub async fn search_tweets(&self, params: &SearchParameters) -> Result<Vec<Tweet>, SearchApiError> {
        self.validator().validate_or_fail(Some(params))?;

        let target = params.max_results as usize;
        let mut tweets: Vec<Tweet> = Vec::with_capacity(target.min(self.page_size as usize));
        let mut page_params = params.clone();
        let mut page = 0u32;

        while tweets.len() < target {
            let remaining = target - tweets.len();
            page_params.max_results = u32::try_from(remaining).unwrap_or(u32::MAX);

            let response = self.search_page(&page_params).await?;
            page += 1;

            let min_id = response.min_id();
            let has_next = response.has_next_page();
            tweets.extend(response.statuses.into_iter().take(remaining));

            tracing::debug!(page, collected = tweets.len(), target, "collected search page");

            match min_id {
                Some(id) if has_next && id > 0 => page_params.max_id = Some(id - 1),
                _ => break,
            }
        }

        tracing::info!(pages = page, tweets = tweets.len(), "search complete");
        Ok(tweets)
    }
}
