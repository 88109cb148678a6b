//! Query-string generation for `GET search/tweets.json`.
//!
//! Parameters are validated first; the per-field predicates of
//! [`SearchQueryValidator`] then decide which request parameters are emitted.
//! Unset or sentinel values (empty locale, `Language::Undefined`, the zero
//! timestamp) are left out of the request entirely.

use chrono::{DateTime, Utc};
use tweetq_core::{SearchParameters, SearchQueryValidator, ValidationError};
use url::Url;

/// Path of the search endpoint, relative to the API base URL.
pub const SEARCH_PATH: &str = "search/tweets.json";

/// Builds request parameters from a [`SearchParameters`] value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchQueryGenerator {
    validator: SearchQueryValidator,
}

impl SearchQueryGenerator {
    /// Create a generator gated by `validator`.
    pub fn new(validator: SearchQueryValidator) -> Self {
        Self { validator }
    }

    /// The validator used to gate every generated request.
    pub fn validator(&self) -> &SearchQueryValidator {
        &self.validator
    }

    /// Validate `params` and produce the ordered request parameters.
    ///
    /// `page_size` caps `count`; the total across pages is bounded by the
    /// caller using `params.max_results`.
    pub fn generate(
        &self,
        params: &SearchParameters,
        page_size: u32,
    ) -> Result<Vec<(&'static str, String)>, ValidationError> {
        self.validator.validate_or_fail(Some(params))?;

        let mut pairs = Vec::new();

        let q = self.query_term(params);
        if !q.is_empty() {
            pairs.push(("q", q));
        }

        if let Some(geo) = params.geo_code.as_ref() {
            if self.validator.is_geo_code_valid(Some(geo)) {
                pairs.push(("geocode", geo.to_query_value()));
            }
        }

        if self.validator.is_language_defined(params.language) {
            pairs.push(("lang", params.language.code().to_string()));
        }

        if let Some(locale) = params.locale.as_deref() {
            if self.validator.is_locale_valid(Some(locale)) {
                pairs.push(("locale", locale.to_string()));
            }
        }

        pairs.push(("result_type", params.result_type.as_str().to_string()));
        pairs.push(("count", params.max_results.min(page_size).max(1).to_string()));

        if let Some(until) = self.defined_date(params.until.as_ref()) {
            pairs.push(("until", until));
        }
        if let Some(since) = self.defined_date(params.since.as_ref()) {
            pairs.push(("since", since));
        }

        if let Some(since_id) = params.since_id {
            pairs.push(("since_id", since_id.to_string()));
        }
        if let Some(max_id) = params.max_id {
            pairs.push(("max_id", max_id.to_string()));
        }

        pairs.push(("include_entities", params.include_entities.to_string()));
        pairs.push(("tweet_mode", "extended".to_string()));

        Ok(pairs)
    }

    /// Free-text query followed by one `filter:` operator per flag.
    fn query_term(&self, params: &SearchParameters) -> String {
        let mut terms = Vec::new();
        if let Some(query) = params.query.as_deref() {
            if self.validator.is_query_valid(Some(query)) {
                terms.push(query.to_string());
            }
        }
        terms.extend(params.filters.operators());
        terms.join(" ")
    }

    fn defined_date(&self, timestamp: Option<&DateTime<Utc>>) -> Option<String> {
        timestamp
            .filter(|t| self.validator.is_timestamp_defined(t))
            .map(|t| t.format("%Y-%m-%d").to_string())
    }
}

/// Resolve the search endpoint against `api_url` and attach `pairs` as a
/// form-encoded query string.
pub fn search_url(api_url: &Url, pairs: &[(&'static str, String)]) -> Result<Url, url::ParseError> {
    let mut url = api_url.join(SEARCH_PATH)?;
    url.query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tweetq_core::{DistanceUnit, GeoCode, Language, SearchFilters, SearchResultType};

    fn generate(params: &SearchParameters) -> Vec<(&'static str, String)> {
        SearchQueryGenerator::default().generate(params, 100).unwrap()
    }

    fn value<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn minimal_query_emits_defaults_only() {
        let pairs = generate(&SearchParameters::new("rust"));
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["q", "result_type", "count", "include_entities", "tweet_mode"]
        );
        assert_eq!(value(&pairs, "q"), Some("rust"));
        assert_eq!(value(&pairs, "result_type"), Some("mixed"));
        assert_eq!(value(&pairs, "count"), Some("100"));
    }

    #[test]
    fn filters_are_appended_to_query() {
        let params = SearchParameters::new("cats")
            .with_filters(SearchFilters::IMAGES | SearchFilters::VERIFIED);
        let pairs = generate(&params);
        assert_eq!(value(&pairs, "q"), Some("cats filter:images filter:verified"));
    }

    #[test]
    fn filter_only_search_has_operator_query() {
        let params = SearchParameters::default().with_filters(SearchFilters::NEWS);
        let pairs = generate(&params);
        assert_eq!(value(&pairs, "q"), Some("filter:news"));
    }

    #[test]
    fn geo_only_search_omits_q() {
        let geo = GeoCode::new(37.781157, -122.39872, 1.0, DistanceUnit::Miles);
        let pairs = generate(&SearchParameters::from_geo_code(geo));
        assert_eq!(value(&pairs, "q"), None);
        assert_eq!(value(&pairs, "geocode"), Some("37.781157,-122.39872,1mi"));
    }

    #[test]
    fn sentinel_values_are_omitted() {
        let mut params = SearchParameters::new("rust").with_locale("");
        params.until = Some(DateTime::<Utc>::default());
        let pairs = generate(&params);
        assert_eq!(value(&pairs, "lang"), None);
        assert_eq!(value(&pairs, "locale"), None);
        assert_eq!(value(&pairs, "until"), None);
    }

    #[test]
    fn defined_values_are_emitted() {
        let until = Utc.with_ymd_and_hms(2026, 10, 12, 15, 30, 0).unwrap();
        let since = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        let params = SearchParameters::new("rust")
            .with_language(Language::Japanese)
            .with_locale("ja")
            .with_until(until)
            .with_since(since)
            .with_since_id(10)
            .with_max_id(99)
            .with_result_type(SearchResultType::Popular)
            .with_include_entities(false);
        let pairs = generate(&params);
        assert_eq!(value(&pairs, "lang"), Some("ja"));
        assert_eq!(value(&pairs, "locale"), Some("ja"));
        assert_eq!(value(&pairs, "until"), Some("2026-10-12"));
        assert_eq!(value(&pairs, "since"), Some("2026-10-01"));
        assert_eq!(value(&pairs, "since_id"), Some("10"));
        assert_eq!(value(&pairs, "max_id"), Some("99"));
        assert_eq!(value(&pairs, "result_type"), Some("popular"));
        assert_eq!(value(&pairs, "include_entities"), Some("false"));
    }

    #[test]
    fn count_is_capped_by_page_size() {
        let params = SearchParameters::new("rust").with_max_results(500);
        let pairs = SearchQueryGenerator::default().generate(&params, 40).unwrap();
        assert_eq!(value(&pairs, "count"), Some("40"));

        let params = SearchParameters::new("rust").with_max_results(7);
        let pairs = SearchQueryGenerator::default().generate(&params, 40).unwrap();
        assert_eq!(value(&pairs, "count"), Some("7"));
    }

    #[test]
    fn invalid_parameters_produce_no_pairs() {
        let err = SearchQueryGenerator::default()
            .generate(&SearchParameters::new(""), 100)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidArgument { .. }));
    }

    #[test]
    fn search_url_encodes_pairs() {
        let base: Url = "https://api.example.com/1.1/".parse().unwrap();
        let pairs = vec![
            ("q", "rust lang #async".to_string()),
            ("count", "5".to_string()),
        ];
        let url = search_url(&base, &pairs).unwrap();
        assert_eq!(url.path(), "/1.1/search/tweets.json");
        assert_eq!(url.query(), Some("q=rust+lang+%23async&count=5"));
    }
}
