//! Integration tests for the request engine over the reqwest transport
//!
//! Verifies outcome classification against real HTTP responses.

use std::sync::Arc;

use papertrail_client::{ApiRequest, ClientError, HttpServiceEngine, ReqwestTransport};
use papertrail_core::config::ConfigBuilder;
use papertrail_core::domain::MessageLogContent;
use papertrail_core::ports::HttpMethod;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

fn url(server: &MockServer, request_path: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), request_path)).unwrap()
}

#[tokio::test]
async fn test_error_entity_is_returned_verbatim() {
    let server = MockServer::start().await;
    common::mount_json(
        &server,
        "GET",
        "/api/v1/content/message/1",
        404,
        common::error_entity(404, "Not Found", "/api/v1/content/message/1"),
    )
    .await;

    let engine = HttpServiceEngine::with_reqwest().unwrap();
    let outcome = engine
        .execute::<MessageLogContent>(ApiRequest::new(
            HttpMethod::Get,
            url(&server, "/api/v1/content/message/1"),
        ))
        .await
        .unwrap();

    let error = outcome.failure().unwrap();
    assert_eq!(error.status(), 404);
    assert_eq!(error.error(), "Not Found");
    assert_eq!(error.message(), "Not Found for /api/v1/content/message/1");
    assert_eq!(error.time_stamp(), "2026-01-15T10:00:00Z");
}

#[tokio::test]
async fn test_undecodable_error_body_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/log/audit"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream gone"))
        .mount(&server)
        .await;

    let engine = HttpServiceEngine::with_reqwest().unwrap();
    let request = ApiRequest::new(HttpMethod::Post, url(&server, "/api/v1/log/audit"))
        .json(&json!({"guildId": "1", "channelId": "2"}))
        .unwrap();
    let error = engine.execute::<()>(request).await.unwrap().failure().unwrap();

    assert_eq!(error.status(), 502);
    assert_eq!(error.error(), "Bad Gateway");
    assert_eq!(error.message(), "upstream gone");
    assert_eq!(error.path(), "/api/v1/log/audit");
}

#[tokio::test]
async fn test_no_response_yields_sentinel_failure() {
    let engine = HttpServiceEngine::with_reqwest().unwrap();
    let target = Url::parse(common::unreachable_base_url())
        .unwrap()
        .join("api/v1/log/audit/1")
        .unwrap();

    let error = engine
        .execute::<()>(ApiRequest::new(HttpMethod::Get, target))
        .await
        .unwrap()
        .failure()
        .unwrap();

    assert!(error.is_no_response());
    assert_eq!(error.status(), 0);
    assert!(!error.message().is_empty());
}

#[tokio::test]
async fn test_success_with_wrong_shape_is_an_error() {
    let server = MockServer::start().await;
    common::mount_json(&server, "GET", "/api/v1/content/message/1", 200, json!([1, 2, 3])).await;

    let engine = HttpServiceEngine::with_reqwest().unwrap();
    let result = engine
        .execute::<MessageLogContent>(ApiRequest::new(
            HttpMethod::Get,
            url(&server, "/api/v1/content/message/1"),
        ))
        .await;

    assert!(matches!(result, Err(ClientError::UnexpectedResponse { .. })));
}

#[tokio::test]
async fn test_json_headers_and_caller_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/content/message/1"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(header("x-request-id", "req-42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let engine = HttpServiceEngine::with_reqwest().unwrap();
    let request = ApiRequest::new(HttpMethod::Delete, url(&server, "/api/v1/content/message/1"))
        .header("X-Request-Id", "req-42");
    assert!(engine.execute::<()>(request).await.unwrap().is_success());
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/log/audit/1"))
        .and(header("user-agent", "moderation-bot/2.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"guildId": "1", "channelId": "2"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ConfigBuilder::new().api_user_agent("moderation-bot/2.1").build();
    let transport = ReqwestTransport::from_config(&config.api).unwrap();
    let engine = HttpServiceEngine::new(Arc::new(transport));

    let outcome = engine
        .execute::<serde_json::Value>(ApiRequest::new(
            HttpMethod::Get,
            url(&server, "/api/v1/log/audit/1"),
        ))
        .await
        .unwrap();
    assert_eq!(outcome.success().unwrap()["channelId"], "2");
}

#[tokio::test]
async fn test_truncated_error_body_keeps_status() {
    let base = common::truncated_body_server("500 Internal Server Error").await;
    let target = Url::parse(&base).unwrap().join("api/v1/log/audit/1").unwrap();

    let engine = HttpServiceEngine::with_reqwest().unwrap();
    let error = engine
        .execute::<()>(ApiRequest::new(HttpMethod::Get, target))
        .await
        .unwrap()
        .failure()
        .unwrap();

    assert!(!error.is_no_response());
    assert_eq!(error.status(), 500);
    assert_eq!(error.error(), "Internal Server Error");
    assert_eq!(error.path(), "/api/v1/log/audit/1");
}

#[tokio::test]
async fn test_truncated_success_body_is_a_contract_error() {
    let base = common::truncated_body_server("200 OK").await;
    let target = Url::parse(&base).unwrap().join("api/v1/log/audit/1").unwrap();

    let engine = HttpServiceEngine::with_reqwest().unwrap();
    let result = engine
        .execute::<MessageLogContent>(ApiRequest::new(HttpMethod::Get, target))
        .await;

    assert!(matches!(
        result,
        Err(ClientError::UnexpectedResponse { status: 200, .. })
    ));
}
