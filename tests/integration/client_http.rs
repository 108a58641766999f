//! HTTP contract tests for `SearxngClient` against a mock SearXNG instance.

use super::test_utils::{config_payload, search_payload, unreachable_base_url};
use searxng_cli::client::{SearchRequest, SearxngClient};
use searxng_cli::error::ApiError;
use std::collections::HashMap;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn received_query(server: &MockServer) -> HashMap<String, String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].url.query_pairs().into_owned().collect()
}

#[tokio::test]
async fn test_search_sends_required_and_given_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust async"))
        .and(query_param("format", "json"))
        .and(query_param("pageno", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let client = SearxngClient::new(&format!("{}/", server.uri())).unwrap();
    let mut request = SearchRequest::new("rust async");
    request.page = 2;
    request.categories = Some("general,it".to_string());
    request.engines = Some(String::new());
    request.safe_search = Some(0);

    let response = client.search(&request).await.unwrap();
    assert_eq!(response.query, "rust");
    assert_eq!(response.number_of_results, 42);
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[1].published_date, "2024-05-01T00:00:00");
    assert_eq!(response.unresponsive_engines[0].engine, "qwant");
    assert_eq!(response.unresponsive_engines[0].error, "timeout");
    assert_eq!(response.unresponsive_engines[1].engine, "yahoo");

    let query = received_query(&server).await;
    assert_eq!(query.get("categories").map(String::as_str), Some("general,it"));
    assert_eq!(query.get("safesearch").map(String::as_str), Some("0"));
    assert!(!query.contains_key("engines"));
    assert!(!query.contains_key("language"));
    assert!(!query.contains_key("time_range"));
}

#[tokio::test]
async fn test_search_omits_safesearch_when_not_given() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = SearxngClient::new(&server.uri()).unwrap();
    let response = client.search(&SearchRequest::new("q")).await.unwrap();
    assert!(response.results.is_empty());

    let query = received_query(&server).await;
    assert_eq!(query.get("pageno").map(String::as_str), Some("1"));
    assert!(!query.contains_key("safesearch"));
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let client = SearxngClient::new(&server.uri()).unwrap();
    let err = client.search(&SearchRequest::new("q")).await.unwrap_err();
    match &err {
        ApiError::HttpStatusError { status, url, body } => {
            assert_eq!(*status, 429);
            assert!(url.ends_with("/search"));
            assert_eq!(body, "Too Many Requests");
        }
        other => panic!("expected HttpStatusError, got {:?}", other),
    }
    assert_eq!(err.status(), Some(429));
    assert!(err.to_string().contains("Too Many Requests"));
}

#[tokio::test]
async fn test_redirect_is_http_error_not_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/elsewhere"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"query": "elsewhere"})),
        )
        .expect(0)
        .mount(&server)
        .await;

    let client = SearxngClient::new(&server.uri()).unwrap();
    let err = client.search(&SearchRequest::new("q")).await.unwrap_err();
    assert!(matches!(err, ApiError::HttpStatusError { status: 302, .. }));
}

#[tokio::test]
async fn test_slow_response_is_timeout_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(search_payload())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = SearxngClient::with_timeout(&server.uri(), Duration::from_millis(100)).unwrap();
    let err = client.search(&SearchRequest::new("q")).await.unwrap_err();
    assert!(
        matches!(err, ApiError::NetworkError { kind: "timeout", .. }),
        "got {:?}",
        err
    );
}

#[tokio::test]
async fn test_undecodable_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = SearxngClient::new(&server.uri()).unwrap();
    let err = client.search(&SearchRequest::new("q")).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = SearxngClient::new(&unreachable_base_url()).unwrap();
    let err = client.search(&SearchRequest::new("q")).await.unwrap_err();
    assert!(matches!(err, ApiError::NetworkError { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_engines_and_categories_from_config() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_payload()))
        .expect(2)
        .mount(&server)
        .await;

    let client = SearxngClient::new(&server.uri()).unwrap();

    let engines = client.get_engines().await.unwrap();
    let names: Vec<&str> = engines.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["wikipedia", "bing", "arxiv"]);
    assert!(!engines[1].enabled);
    assert!(engines[2].enabled);

    let categories = client.get_categories().await.unwrap();
    assert_eq!(categories, vec!["news", "general", "images"]);
}

#[tokio::test]
async fn test_config_without_lists_yields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"instance_name": "x"})),
        )
        .mount(&server)
        .await;

    let client = SearxngClient::new(&server.uri()).unwrap();
    assert!(client.get_engines().await.unwrap().is_empty());
    assert!(client.get_categories().await.unwrap().is_empty());
}
