//! Integration tests for audit-log registration
//!
//! Drives AuditLogRegistrationClient against a wiremock PaperTrail server.

use std::sync::Arc;

use papertrail_client::{AuditLogRegistrationClient, ClientError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{self, CountingTransport, CHANNEL_ID, GUILD_ID};

#[tokio::test]
async fn test_register_guild_returns_true_on_echoed_entity() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/log/audit"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"guildId": GUILD_ID, "channelId": CHANNEL_ID})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"guildId": GUILD_ID, "channelId": CHANNEL_ID})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AuditLogRegistrationClient::new(&server.uri()).unwrap();
    assert!(client.register_guild(GUILD_ID, CHANNEL_ID).await.unwrap());
}

#[tokio::test]
async fn test_register_guild_returns_false_on_conflict() {
    let server = MockServer::start().await;
    common::mount_json(
        &server,
        "POST",
        "/api/v1/log/audit",
        409,
        common::error_entity(409, "Conflict", "/api/v1/log/audit"),
    )
    .await;

    let client = AuditLogRegistrationClient::new(&server.uri()).unwrap();
    assert!(!client.register_guild(GUILD_ID, CHANNEL_ID).await.unwrap());
}

#[tokio::test]
async fn test_get_registered_guild_returns_entity() {
    let server = MockServer::start().await;
    common::mount_json(
        &server,
        "GET",
        "/api/v1/log/audit/123456789",
        200,
        json!({"guildId": GUILD_ID, "channelId": CHANNEL_ID}),
    )
    .await;

    let client = AuditLogRegistrationClient::new(&server.uri()).unwrap();
    let registration = client
        .get_registered_guild(GUILD_ID)
        .await
        .unwrap()
        .expect("guild should be registered");

    assert_eq!(registration.guild_id().as_str(), GUILD_ID);
    assert_eq!(registration.channel_id().as_str(), CHANNEL_ID);
}

#[tokio::test]
async fn test_get_registered_guild_returns_none_on_error_entity() {
    let server = MockServer::start().await;
    common::mount_json(
        &server,
        "GET",
        "/api/v1/log/audit/123456789",
        404,
        common::error_entity(404, "Not Found", "/api/v1/log/audit/123456789"),
    )
    .await;

    let client = AuditLogRegistrationClient::new(&server.uri()).unwrap();
    let result = client.get_registered_guild(GUILD_ID).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_update_registered_guild_puts_entity() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/log/audit"))
        .and(body_json(json!({"guildId": GUILD_ID, "channelId": "555"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"guildId": GUILD_ID, "channelId": "555"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AuditLogRegistrationClient::new(&server.uri()).unwrap();
    assert!(client.update_registered_guild(GUILD_ID, "555").await.unwrap());
}

#[tokio::test]
async fn test_delete_registered_guild_returns_true_on_no_content() {
    let server = MockServer::start().await;
    common::mount_empty(&server, "DELETE", "/api/v1/log/audit/123456789", 204).await;

    let client = AuditLogRegistrationClient::new(&server.uri()).unwrap();
    assert!(client.delete_registered_guild(GUILD_ID).await.unwrap());
}

#[tokio::test]
async fn test_delete_registered_guild_returns_false_on_server_error() {
    let server = MockServer::start().await;
    common::mount_empty(&server, "DELETE", "/api/v1/log/audit/123456789", 500).await;

    let client = AuditLogRegistrationClient::new(&server.uri()).unwrap();
    assert!(!client.delete_registered_guild(GUILD_ID).await.unwrap());
}

#[tokio::test]
async fn test_base_url_with_prefix_is_preserved() {
    let server = MockServer::start().await;
    common::mount_json(
        &server,
        "GET",
        "/papertrail/api/v1/log/audit/123456789",
        200,
        json!({"guildId": GUILD_ID, "channelId": CHANNEL_ID}),
    )
    .await;

    let base = format!("{}/papertrail", server.uri());
    let client = AuditLogRegistrationClient::new(&base).unwrap();
    assert!(client.get_registered_guild(GUILD_ID).await.unwrap().is_some());
}

#[tokio::test]
async fn test_unreachable_service_returns_false() {
    let client = AuditLogRegistrationClient::new(common::unreachable_base_url()).unwrap();
    assert!(!client.register_guild(GUILD_ID, CHANNEL_ID).await.unwrap());
    assert!(client.get_registered_guild(GUILD_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_blank_guild_id_never_reaches_transport() {
    let transport = Arc::new(CountingTransport::default());
    let client =
        AuditLogRegistrationClient::with_transport("https://api.example.com", transport.clone())
            .unwrap();

    for result in [
        client.register_guild("", CHANNEL_ID).await,
        client.update_registered_guild(GUILD_ID, "").await,
        client.delete_registered_guild("  ").await,
    ] {
        assert!(matches!(result, Err(ClientError::InvalidArgument { .. })));
    }
    assert!(client.get_registered_guild("").await.is_err());

    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_blank_base_url_is_rejected() {
    for base in ["", " ", "\n"] {
        let result = AuditLogRegistrationClient::new(base);
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }
}
