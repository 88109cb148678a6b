//! # Error Hierarchy
//!
//! Validation errors raised while building or checking search parameters.
//! Every variant carries the offending input or parameter name so that a
//! caller can report the problem without re-inspecting the request.

use thiserror::Error;

/// Errors produced by search parameter parsing and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required argument was not supplied at all.
    #[error("argument \"{parameter}\" must not be null")]
    NullArgument {
        /// Name of the missing argument.
        parameter: &'static str,
    },

    /// An argument was supplied but its content is unusable.
    #[error("invalid argument \"{parameter}\": {reason}")]
    InvalidArgument {
        /// Name of the rejected argument.
        parameter: &'static str,
        /// Human-readable reason for the rejection.
        reason: String,
    },

    /// Language code is not one the search endpoint accepts.
    #[error("unknown language code: \"{0}\"")]
    UnknownLanguage(String),

    /// Filter name does not match any search filter.
    #[error("unknown search filter: \"{0}\"")]
    UnknownFilter(String),

    /// Result type is not `mixed`, `recent` or `popular`.
    #[error("unknown result type: \"{0}\" (expected mixed, recent or popular)")]
    UnknownResultType(String),

    /// Geo-code string does not follow `lat,long,radius(km|mi)`.
    #[error("invalid geo-code: \"{value}\" ({reason})")]
    InvalidGeoCode {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ValidationError {
    /// Whether this error means the argument was absent rather than malformed.
    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }
}
