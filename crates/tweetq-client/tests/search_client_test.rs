//! Contract tests for SearchClient against a simulated search endpoint.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET | `/search/tweets.json` | `search_page_*`, `search_tweets_*` |
//! | (none) | - | `invalid_*` (rejected before any request) |

use tweetq_client::{SearchApiConfig, SearchApiError, TweetqClient};
use tweetq_core::{DistanceUnit, GeoCode, Language, SearchFilters, SearchParameters, ValidationError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client with the API URL pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> TweetqClient {
    let config = SearchApiConfig {
        api_url: format!("{}/", mock_server.uri()).parse().unwrap(),
        bearer_token: zeroize::Zeroizing::new("test-token".into()),
        timeout_secs: 5,
        page_size: 100,
    };
    TweetqClient::new(config).unwrap()
}

fn tweet(id: u64, text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "id_str": id.to_string(),
        "full_text": text,
        "created_at": "Mon Oct 12 08:00:00 +0000 2026",
        "lang": "en",
        "user": {"id": 42, "screen_name": "ferris", "name": "Ferris"}
    })
}

// ── GET /search/tweets.json (single page) ────────────────────────────

#[tokio::test]
async fn search_page_sends_generated_query_and_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .and(query_param("q", "rustlang filter:links"))
        .and(query_param("lang", "en"))
        .and(query_param("count", "100"))
        .and(query_param("result_type", "mixed"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statuses": [tweet(2, "Rust 2.0 when"), tweet(1, "fearless concurrency")],
            "search_metadata": {"count": 100, "query": "rustlang"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let params = SearchParameters::new("rustlang")
        .with_language(Language::English)
        .with_filters(SearchFilters::LINKS);

    let page = client.search().search_page(&params).await.unwrap();
    assert_eq!(page.statuses.len(), 2);
    assert_eq!(page.statuses[0].text, "Rust 2.0 when");
    assert_eq!(page.statuses[1].user.as_ref().unwrap().screen_name, "ferris");
    assert!(!page.has_next_page());
}

#[tokio::test]
async fn search_page_geo_only_request_carries_geocode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .and(query_param("geocode", "51.5,-0.12,2km"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statuses": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let params = SearchParameters::from_geo_code(GeoCode::new(
        51.5,
        -0.12,
        2.0,
        DistanceUnit::Kilometers,
    ));

    let page = client.search().search_page(&params).await.unwrap();
    assert!(page.statuses.is_empty());
}

#[tokio::test]
async fn search_page_handles_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"errors":[{"code":89,"message":"Invalid or expired token."}]}"#),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .search()
        .search_page(&SearchParameters::new("rust"))
        .await;

    match result.unwrap_err() {
        SearchApiError::ApiError { status, body, .. } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid or expired token"));
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn search_page_handles_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .search()
        .search_page(&SearchParameters::new("rust"))
        .await;
    assert!(matches!(
        result.unwrap_err(),
        SearchApiError::Deserialization { .. }
    ));
}

// ── Validation before network I/O ────────────────────────────────────

#[tokio::test]
async fn invalid_parameters_never_reach_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statuses": []
        })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let params = SearchParameters::new("");

    let err = client.search().search_tweets(&params).await.unwrap_err();
    assert!(err.is_rejected_locally());
    match err {
        SearchApiError::InvalidParameters(ValidationError::InvalidArgument { parameter, .. }) => {
            assert_eq!(parameter, "search_parameters");
        }
        other => panic!("expected InvalidParameters, got: {other:?}"),
    }

    let err = client.search().search_page(&params).await.unwrap_err();
    assert!(matches!(err, SearchApiError::InvalidParameters(_)));
}

#[tokio::test]
async fn zero_max_results_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let params = SearchParameters::new("rust").with_max_results(0);
    let tweets = client.search().search_tweets(&params).await.unwrap();
    assert!(tweets.is_empty());
}

// ── GET /search/tweets.json (paged) ──────────────────────────────────

#[tokio::test]
async fn search_tweets_pages_with_max_id_until_target_reached() {
    let mock_server = MockServer::start().await;

    // Second page: requested with max_id = (lowest id on page 1) - 1.
    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .and(query_param("max_id", "99"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statuses": [tweet(90, "third")],
            "search_metadata": {"next_results": "?max_id=89&q=rust"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // First page.
    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .and(query_param("count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statuses": [tweet(120, "first"), tweet(100, "second")],
            "search_metadata": {"next_results": "?max_id=99&q=rust"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SearchApiConfig {
        api_url: format!("{}/", mock_server.uri()).parse().unwrap(),
        bearer_token: zeroize::Zeroizing::new("test-token".into()),
        timeout_secs: 5,
        page_size: 2,
    };
    let client = TweetqClient::new(config).unwrap();
    let params = SearchParameters::new("rust").with_max_results(3);

    let tweets = client.search().search_tweets(&params).await.unwrap();
    let ids: Vec<u64> = tweets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![120, 100, 90]);
}

#[tokio::test]
async fn search_tweets_stops_when_no_next_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statuses": [tweet(5, "only one")],
            "search_metadata": {"count": 100}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let tweets = client
        .search()
        .search_tweets(&SearchParameters::new("rare").with_max_results(500))
        .await
        .unwrap();
    assert_eq!(tweets.len(), 1);
}

#[tokio::test]
async fn search_tweets_stops_on_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tweets.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statuses": [],
            "search_metadata": {"next_results": "?max_id=1&q=x"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let tweets = client
        .search()
        .search_tweets(&SearchParameters::new("nothing"))
        .await
        .unwrap();
    assert!(tweets.is_empty());
}

#[tokio::test]
async fn request_url_is_built_without_network() {
    let config = SearchApiConfig::local_mock(19999, "t").unwrap();
    let client = TweetqClient::new(config).unwrap();
    let url = client
        .search()
        .request_url(&SearchParameters::new("hello world"))
        .unwrap();
    assert_eq!(url.path(), "/search/tweets.json");
    assert!(url.query().unwrap().starts_with("q=hello+world&"));
}
