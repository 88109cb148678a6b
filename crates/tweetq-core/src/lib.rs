#![deny(missing_docs)]

//! # tweetq-core: Search Parameters and Validation
//!
//! Foundational types shared by the tweetq client and CLI. The crate has no
//! internal dependencies and only `serde`, `thiserror` and `chrono` from the
//! external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Typed parameters.** A search request is described by a
//!    [`SearchParameters`] value; languages, distance units, result types and
//!    filters are closed enums or flag sets, never free-form strings.
//!
//! 2. **Validation before serialization.** [`SearchQueryValidator`] decides
//!    whether a parameter set is worth sending. The request builder runs it
//!    before any network I/O and turns a failure into an API-level rejection.
//!
//! 3. **[`ValidationError`] hierarchy.** Structured errors with `thiserror`,
//!    no `.unwrap()` outside tests.

pub mod error;
pub mod filters;
pub mod geo;
pub mod language;
pub mod params;
pub mod validator;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use filters::SearchFilters;
pub use geo::{DistanceUnit, GeoCode};
pub use language::Language;
pub use params::{SearchParameters, SearchResultType};
pub use validator::SearchQueryValidator;
