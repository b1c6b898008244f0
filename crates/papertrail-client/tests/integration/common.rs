//! Shared test helpers for PaperTrail integration tests
//!
//! Provides wiremock-based mock server setup and a counting transport for
//! checks that must observe zero network activity.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use papertrail_core::ports::{HttpRequest, HttpResponse, IHttpTransport};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GUILD_ID: &str = "123456789";
pub const CHANNEL_ID: &str = "987654321";
pub const MESSAGE_ID: &str = "123456789";
pub const AUTHOR_ID: &str = "987654321";

/// Error body in the service's standard shape
pub fn error_entity(status: u16, error: &str, request_path: &str) -> Value {
    json!({
        "status": status,
        "error": error,
        "message": format!("{error} for {request_path}"),
        "timeStamp": "2026-01-15T10:00:00Z",
        "path": request_path
    })
}

/// Mounts `verb path` answering with `status` and a JSON body
pub async fn mount_json(server: &MockServer, verb: &str, request_path: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(request_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts `verb path` answering with `status` and no body
pub async fn mount_empty(server: &MockServer, verb: &str, request_path: &str, status: u16) {
    Mock::given(method(verb))
        .and(path(request_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Base URL of a port nothing listens on
pub fn unreachable_base_url() -> &'static str {
    "http://127.0.0.1:1/"
}

/// Starts a server that answers once with `status_line` and a body cut short
///
/// The declared Content-Length is larger than what is sent before the
/// connection closes. Returns the base URL to point a client at.
pub async fn truncated_body_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: 100\r\nConnection: close\r\n\r\n<html>oops"
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/")
}

/// Transport that counts calls and never answers
#[derive(Default)]
pub struct CountingTransport {
    calls: AtomicUsize,
}

impl CountingTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IHttpTransport for CountingTransport {
    async fn send(&self, _request: HttpRequest) -> anyhow::Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("counting transport does not send")
    }
}
