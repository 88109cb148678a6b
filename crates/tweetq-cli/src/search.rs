//! # Search Subcommand
//!
//! Builds [`SearchParameters`] from command-line flags and validates them
//! before anything else happens. With `--dry-run` the generated request URL is
//! printed and no token or network access is needed.

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use tweetq_client::query::SearchQueryGenerator;
use tweetq_client::{SearchApiConfig, Tweet, TweetqClient};
use tweetq_core::{GeoCode, Language, SearchFilters, SearchParameters, SearchResultType};

/// Arguments for the `tweetq search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query. May be omitted for geo-only or filter-only searches.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Restrict to a radius around a point: LAT,LONG,RADIUS(km|mi).
    #[arg(long, allow_hyphen_values = true)]
    pub geocode: Option<GeoCode>,

    /// Restrict results to a language code (see `tweetq languages`).
    #[arg(long)]
    pub lang: Option<Language>,

    /// Locale of the query text.
    #[arg(long)]
    pub locale: Option<String>,

    /// Only tweets created before this date (YYYY-MM-DD).
    #[arg(long)]
    pub until: Option<String>,

    /// Only tweets created on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub since: Option<String>,

    /// Only tweets newer than this ID.
    #[arg(long)]
    pub since_id: Option<u64>,

    /// Only tweets at or below this ID.
    #[arg(long)]
    pub max_id: Option<u64>,

    /// Result filter, repeatable (images, links, verified, ...).
    #[arg(long = "filter", value_name = "NAME")]
    pub filters: Vec<SearchFilters>,

    /// mixed, recent or popular.
    #[arg(long, default_value = "mixed")]
    pub result_type: SearchResultType,

    /// Total number of tweets to collect.
    #[arg(long, default_value_t = 100)]
    pub max_results: u32,

    /// Omit the entities node from returned tweets.
    #[arg(long)]
    pub no_entities: bool,

    /// Validate and print the request URL without sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// Print tweets as JSON lines.
    #[arg(long)]
    pub json: bool,
}

/// Execute the search subcommand.
///
/// Returns exit code: 0 on success, 1 if the parameters are rejected.
pub fn run_search(args: &SearchArgs) -> Result<u8> {
    let params = build_parameters(args)?;

    let generator = SearchQueryGenerator::default();
    if let Err(e) = generator.validator().validate_or_fail(Some(&params)) {
        println!("Invalid search: {e}");
        return Ok(1);
    }

    if args.dry_run {
        let config = SearchApiConfig::from_env_optional_token()
            .context("failed to load search API configuration")?;
        println!("GET {}", preview_url(config, &params)?);
        return Ok(0);
    }

    let config = SearchApiConfig::from_env().context("failed to load search API configuration")?;
    let client = TweetqClient::new(config).context("failed to initialize search API client")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let tweets = runtime
        .block_on(client.search().search_tweets(&params))
        .context("search failed")?;

    tracing::info!(count = tweets.len(), "search returned tweets");

    for tweet in &tweets {
        if args.json {
            println!("{}", serde_json::to_string(tweet)?);
        } else {
            println!("{}", format_tweet(tweet));
        }
    }

    Ok(0)
}

/// The URL the first page request would be sent to under `config`.
pub fn preview_url(config: SearchApiConfig, params: &SearchParameters) -> Result<Url> {
    let client = TweetqClient::new(config).context("failed to initialize search API client")?;
    client
        .search()
        .request_url(params)
        .context("failed to build request URL")
}

/// Map command-line flags onto a parameter set.
pub fn build_parameters(args: &SearchArgs) -> Result<SearchParameters> {
    let mut params = SearchParameters {
        query: args.query.clone(),
        geo_code: args.geocode,
        locale: args.locale.clone(),
        language: args.lang.unwrap_or_default(),
        since_id: args.since_id,
        max_id: args.max_id,
        result_type: args.result_type,
        max_results: args.max_results,
        include_entities: !args.no_entities,
        ..SearchParameters::default()
    };

    for filter in &args.filters {
        params.filters |= *filter;
    }
    if let Some(until) = args.until.as_deref() {
        params.until = Some(crate::parse_date(until)?);
    }
    if let Some(since) = args.since.as_deref() {
        params.since = Some(crate::parse_date(since)?);
    }

    Ok(params)
}

/// One tab-separated line per tweet: id, author, single-line text.
fn format_tweet(tweet: &Tweet) -> String {
    let author = tweet
        .user
        .as_ref()
        .map(|u| format!("@{}", u.screen_name))
        .unwrap_or_else(|| "-".to_string());
    let text = tweet.text.replace(['\n', '\r'], " ");
    format!("{}\t{author}\t{text}", tweet.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tweetq_client::TweetUser;
    use tweetq_core::DistanceUnit;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: SearchArgs,
    }

    fn parse(argv: &[&str]) -> SearchArgs {
        let mut full = vec!["tweetq"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args
    }

    #[test]
    fn flags_map_onto_parameters() {
        let args = parse(&[
            "rustlang",
            "--lang",
            "en",
            "--locale",
            "ja",
            "--filter",
            "images",
            "--filter",
            "verified",
            "--result-type",
            "recent",
            "--max-results",
            "20",
            "--until",
            "2026-10-12",
        ]);
        let params = build_parameters(&args).unwrap();
        assert_eq!(params.query.as_deref(), Some("rustlang"));
        assert_eq!(params.language, Language::English);
        assert_eq!(params.locale.as_deref(), Some("ja"));
        assert_eq!(params.filters, SearchFilters::IMAGES | SearchFilters::VERIFIED);
        assert_eq!(params.result_type, SearchResultType::Recent);
        assert_eq!(params.max_results, 20);
        assert_eq!(params.until, Some(crate::parse_date("2026-10-12").unwrap()));
        assert!(params.include_entities);
    }

    #[test]
    fn geocode_flag_accepts_negative_coordinates() {
        let args = parse(&["--geocode", "-33.86,151.2,3mi"]);
        let params = build_parameters(&args).unwrap();
        assert!(params.query.is_none());
        assert_eq!(
            params.geo_code,
            Some(GeoCode::new(-33.86, 151.2, 3.0, DistanceUnit::Miles))
        );
    }

    #[test]
    fn unknown_language_and_filter_are_rejected_by_clap() {
        assert!(TestCli::try_parse_from(["tweetq", "--lang", "xx"]).is_err());
        assert!(TestCli::try_parse_from(["tweetq", "--filter", "gifs"]).is_err());
    }

    #[test]
    fn bad_date_is_an_error() {
        let args = parse(&["rust", "--since", "yesterday"]);
        assert!(build_parameters(&args).is_err());
    }

    #[test]
    fn empty_query_dry_run_is_rejected() {
        let args = parse(&["", "--dry-run"]);
        assert_eq!(run_search(&args).unwrap(), 1);
    }

    #[test]
    fn preview_keeps_base_path_and_configured_page_size() {
        let config = SearchApiConfig {
            page_size: 20,
            ..SearchApiConfig::new(Url::parse("https://api.example.com/1.1").unwrap(), "")
        };
        let params = build_parameters(&parse(&["rust"])).unwrap();
        assert_eq!(
            preview_url(config.clone(), &params).unwrap().as_str(),
            "https://api.example.com/1.1/search/tweets.json\
             ?q=rust&result_type=mixed&count=20&include_entities=true&tweet_mode=extended"
        );

        let client = TweetqClient::new(config.clone()).unwrap();
        assert_eq!(
            preview_url(config, &params).unwrap(),
            client.search().request_url(&params).unwrap()
        );
    }

    #[test]
    fn format_tweet_is_single_line() {
        let tweet = Tweet {
            id: 9,
            id_str: None,
            text: "line one\nline two".into(),
            created_at: None,
            lang: Language::English,
            user: Some(TweetUser {
                id: 1,
                screen_name: "ferris".into(),
                name: "Ferris".into(),
                verified: false,
            }),
            retweet_count: 0,
            favorite_count: 0,
        };
        assert_eq!(format_tweet(&tweet), "9\t@ferris\tline one line two");
    }
}
