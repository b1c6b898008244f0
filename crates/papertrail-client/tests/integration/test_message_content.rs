//! Integration tests for stored message content

use std::sync::Arc;

use papertrail_client::{ClientError, MessageLogContentClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{self, CountingTransport, AUTHOR_ID, MESSAGE_ID};

#[tokio::test]
async fn test_log_message_posts_content() {
    let server = MockServer::start().await;
    let entity = json!({"messageId": MESSAGE_ID, "messageContent": "hello", "authorId": AUTHOR_ID});

    Mock::given(method("POST"))
        .and(path("/api/v1/content/message"))
        .and(body_json(entity.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(entity))
        .expect(1)
        .mount(&server)
        .await;

    let client = MessageLogContentClient::new(&server.uri()).unwrap();
    assert!(client
        .log_message(MESSAGE_ID, Some("hello"), AUTHOR_ID)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_log_message_with_redacted_content_sends_null() {
    let server = MockServer::start().await;
    let entity = json!({"messageId": MESSAGE_ID, "messageContent": null, "authorId": AUTHOR_ID});

    Mock::given(method("POST"))
        .and(path("/api/v1/content/message"))
        .and(body_json(entity.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(entity))
        .expect(1)
        .mount(&server)
        .await;

    let client = MessageLogContentClient::new(&server.uri()).unwrap();
    assert!(client.log_message(MESSAGE_ID, None, AUTHOR_ID).await.unwrap());
}

#[tokio::test]
async fn test_retrieve_message_returns_entity() {
    let server = MockServer::start().await;
    common::mount_json(
        &server,
        "GET",
        "/api/v1/content/message/123456789",
        200,
        json!({"messageId": MESSAGE_ID, "messageContent": "original", "authorId": AUTHOR_ID}),
    )
    .await;

    let client = MessageLogContentClient::new(&server.uri()).unwrap();
    let message = client.retrieve_message(MESSAGE_ID).await.unwrap().unwrap();
    assert_eq!(message.message_content(), Some("original"));
    assert_eq!(message.author_id().as_str(), AUTHOR_ID);
}

#[tokio::test]
async fn test_retrieve_message_returns_none_on_html_error_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/content/message/123456789"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("<html><body>Service Unavailable</body></html>")
                .append_header("Content-Type", "text/html"),
        )
        .mount(&server)
        .await;

    let client = MessageLogContentClient::new(&server.uri()).unwrap();
    assert!(client.retrieve_message(MESSAGE_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_retrieve_message_with_mismatched_body_is_contract_error() {
    let server = MockServer::start().await;
    common::mount_json(
        &server,
        "GET",
        "/api/v1/content/message/123456789",
        200,
        json!({"content": "no ids here"}),
    )
    .await;

    let client = MessageLogContentClient::new(&server.uri()).unwrap();
    let err = client.retrieve_message(MESSAGE_ID).await.unwrap_err();
    assert!(matches!(err, ClientError::UnexpectedResponse { status: 200, .. }));
}

#[tokio::test]
async fn test_update_message_puts_content() {
    let server = MockServer::start().await;
    let entity = json!({"messageId": MESSAGE_ID, "messageContent": "edited", "authorId": AUTHOR_ID});

    Mock::given(method("PUT"))
        .and(path("/api/v1/content/message"))
        .and(body_json(entity.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(entity))
        .expect(1)
        .mount(&server)
        .await;

    let client = MessageLogContentClient::new(&server.uri()).unwrap();
    assert!(client
        .update_message(MESSAGE_ID, "edited", AUTHOR_ID)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_delete_message_returns_true_on_empty_success() {
    let server = MockServer::start().await;
    common::mount_empty(&server, "DELETE", "/api/v1/content/message/123456789", 200).await;

    let client = MessageLogContentClient::new(&server.uri()).unwrap();
    assert!(client.delete_message(MESSAGE_ID).await.unwrap());
}

#[tokio::test]
async fn test_delete_message_returns_false_on_not_found() {
    let server = MockServer::start().await;
    common::mount_json(
        &server,
        "DELETE",
        "/api/v1/content/message/123456789",
        404,
        common::error_entity(404, "Not Found", "/api/v1/content/message/123456789"),
    )
    .await;

    let client = MessageLogContentClient::new(&server.uri()).unwrap();
    assert!(!client.delete_message(MESSAGE_ID).await.unwrap());
}

#[tokio::test]
async fn test_blank_arguments_never_reach_transport() {
    let transport = Arc::new(CountingTransport::default());
    let client =
        MessageLogContentClient::with_transport("https://api.example.com", transport.clone())
            .unwrap();

    assert!(client.log_message("", Some("x"), AUTHOR_ID).await.is_err());
    assert!(client.log_message(MESSAGE_ID, None, "").await.is_err());
    assert!(client.retrieve_message("").await.is_err());
    assert!(client.update_message(MESSAGE_ID, "x", " ").await.is_err());
    assert!(client.delete_message("").await.is_err());

    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_blank_base_url_is_rejected() {
    assert!(matches!(
        MessageLogContentClient::new("  "),
        Err(ClientError::InvalidBaseUrl(_))
    ));
}
