//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::StringMap;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder(server.uri())
        .max_retries(2)
        .backoff(Duration::from_millis(10), Duration::from_millis(50))
        .build();
    HttpClient::new(config, "a@b.com", "tok").unwrap()
}

#[test]
fn test_config_defaults() {
    let config = HttpClientConfig::new("https://example.atlassian.net/wiki/rest/api");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.initial_backoff, Duration::from_millis(100));
    assert_eq!(config.max_backoff, Duration::from_secs(60));
    assert!(config.user_agent.starts_with("confluence-source/"));
}

#[test]
fn test_config_builder() {
    let config = HttpClientConfig::builder("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .backoff(Duration::from_millis(200), Duration::from_secs(30))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.max_backoff, Duration::from_secs(30));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_get_json_sends_auth_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/group"))
        .and(header("authorization", "Basic YUBiLmNvbTp0b2s="))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [], "size": 0, "limit": 100
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client.get_json("/group", &StringMap::new()).await.unwrap();

    assert_eq!(body["size"], 0);
}

#[tokio::test]
async fn test_get_json_sends_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/space"))
        .and(query_param("limit", "100"))
        .and(query_param("expand", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"id": 1}], "size": 1, "limit": 100
        })))
        .mount(&mock_server)
        .await;

    let mut query = StringMap::new();
    query.insert("limit".to_string(), "100".to_string());
    query.insert("expand".to_string(), String::new());

    let client = client_for(&mock_server);
    let body = client.get_json("/space", &query).await.unwrap();

    assert_eq!(body["results"][0]["id"], 1);
}

#[tokio::test]
async fn test_404_fails_immediately() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json("/missing", &StringMap::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retry_on_500_then_success() {
    let mock_server = MockServer::start().await;

    // First two calls return 500, third succeeds
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client.get_json("/flaky", &StringMap::new()).await.unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_retry_on_429_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limited"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .get_json("/limited", &StringMap::new())
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_retries_exhausted_surface_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/always-fail"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json("/always-fail", &StringMap::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>surprise</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_json("/html", &StringMap::new()).await.unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_url_join_normalizes_slashes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/settings/theme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [], "size": 0, "limit": 100
        })))
        .mount(&mock_server)
        .await;

    // Trailing slash on the base, no leading slash on the path
    let config = HttpClientConfig::new(format!("{}/", mock_server.uri()));
    let client = HttpClient::new(config, "a@b.com", "tok").unwrap();

    let body = client
        .get_json("settings/theme", &StringMap::new())
        .await
        .unwrap();
    assert_eq!(body["size"], 0);
}

#[test]
fn test_calculate_backoff_doubles_and_caps() {
    let config = HttpClientConfig::builder("https://api.example.com")
        .backoff(Duration::from_millis(100), Duration::from_millis(500))
        .build();
    let client = HttpClient::new(config, "a@b.com", "tok").unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    assert_eq!(client.calculate_backoff(3), Duration::from_millis(500));
    assert_eq!(client.calculate_backoff(10), Duration::from_millis(500));
}

#[test]
fn test_debug_does_not_leak_credentials() {
    let config = HttpClientConfig::new("https://api.example.com");
    let client = HttpClient::new(config, "a@b.com", "super-secret").unwrap();

    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(!debug_str.contains("super-secret"));
}
