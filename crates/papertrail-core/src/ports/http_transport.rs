//! HTTP transport port (driven/secondary port)
//!
//! This module defines the minimal interface the request engine needs from an
//! HTTP stack: send a method, URL, headers and optional body, and hand back
//! the raw status and body bytes.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because transport errors are adapter-specific
//!   (DNS, TLS, connect, timeout) and the engine only needs their text.
//! - Any HTTP status, including 4xx/5xx, is a successful send. `Err` means no
//!   response was received. Once a status is known it is returned even if
//!   the body could not be read; the body is then empty.
//! - Timeouts, TLS, proxies and connection pooling belong to the adapter.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;

/// HTTP methods used by the PaperTrail API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Canonical upper-case method name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Returns true for methods that conventionally carry a request body
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request headers with case-insensitive names
///
/// Names are stored lower-cased; inserting a name that differs only in case
/// replaces the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: BTreeMap<String, String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any existing value with the same name
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(lower-cased name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One outgoing HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
    pub headers: HeaderSet,
    /// Already-encoded request body
    pub body: Option<Vec<u8>>,
}

/// Raw HTTP response as received from the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport that performs exactly one HTTP round trip per call
///
/// Implementations must not retry and must return `Ok` for every response
/// that arrived, whatever its status.
#[async_trait]
pub trait IHttpTransport: Send + Sync {
    /// Sends `request` and returns the raw response
    ///
    /// # Errors
    /// Returns an error only when no response was received.
    async fn send(&self, request: HttpRequest) -> anyhow::Result<HttpResponse>;
}
