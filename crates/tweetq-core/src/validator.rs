//! # Search Query Validator
//!
//! Decides whether a [`SearchParameters`] value is worth sending to the
//! search endpoint, and exposes the per-field predicates the query generator
//! uses to decide which request parameters to emit.
//!
//! The validator holds no state and performs no I/O. It never logs: failures
//! are returned to the request builder, which rejects the search before any
//! network call is attempted.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::geo::GeoCode;
use crate::language::Language;
use crate::params::SearchParameters;

/// Stateless validator for tweet search parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchQueryValidator;

impl SearchQueryValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Check a parameter set before it is turned into a request.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NullArgument`] if `params` is `None`.
    /// - [`ValidationError::InvalidArgument`] if the query is set but empty
    ///   while neither a geo-code nor any filter is set. Such a request
    ///   would search for nothing.
    ///
    /// An absent query is accepted: geo-only, filter-only and otherwise
    /// unconstrained searches are left to the endpoint.
    pub fn validate_or_fail(&self, params: Option<&SearchParameters>) -> Result<(), ValidationError> {
        let params = params.ok_or(ValidationError::NullArgument {
            parameter: "search_parameters",
        })?;

        let query_is_empty = params.query.as_deref().is_some_and(str::is_empty);
        let has_geo_code = self.is_geo_code_valid(params.geo_code.as_ref());
        let has_filters = !params.filters.is_empty();

        if query_is_empty && !has_geo_code && !has_filters {
            return Err(ValidationError::InvalidArgument {
                parameter: "search_parameters",
                reason: "at least one of query, geo_code or filters must be set".into(),
            });
        }

        Ok(())
    }

    /// `true` iff the query is present and non-empty.
    pub fn is_query_valid(&self, query: Option<&str>) -> bool {
        query.is_some_and(|q| !q.is_empty())
    }

    /// `true` iff a geo-code is present. Coordinates are not range-checked.
    pub fn is_geo_code_valid(&self, geo_code: Option<&GeoCode>) -> bool {
        geo_code.is_some()
    }

    /// `true` iff the locale is present and non-empty.
    pub fn is_locale_valid(&self, locale: Option<&str>) -> bool {
        locale.is_some_and(|l| !l.is_empty())
    }

    /// `true` for every language except [`Language::Undefined`].
    pub fn is_language_defined(&self, language: Language) -> bool {
        language != Language::Undefined
    }

    /// `true` iff `timestamp` differs from the zero timestamp
    /// (`DateTime::<Utc>::default()`, the Unix epoch).
    pub fn is_timestamp_defined(&self, timestamp: &DateTime<Utc>) -> bool {
        *timestamp != DateTime::<Utc>::default()
    }
}
