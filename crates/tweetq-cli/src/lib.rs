//! # tweetq-cli: Command-Line Front End
//!
//! Provides the `tweetq` binary.
//!
//! ## Subcommands
//!
//! - `tweetq search`: Build search parameters from flags, validate them,
//!   then print the request (`--dry-run`) or run the search.
//! - `tweetq languages`: List the language codes accepted by `--lang`.
//!
//! ```bash
//! tweetq search rustlang --lang en --filter links --max-results 50
//! tweetq search --geocode 37.78,-122.41,5km --dry-run
//! ```

pub mod languages;
pub mod search;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Parse a `YYYY-MM-DD` date as midnight UTC.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date \"{value}\" (expected YYYY-MM-DD)"))?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .with_context(|| format!("date out of range: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let dt = parse_date("2026-10-12").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2026, 10, 12));
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("12/10/2026").is_err());
        assert!(parse_date("2026-13-01").is_err());
    }
}
