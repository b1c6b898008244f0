//! Request engine
//!
//! [`HttpServiceEngine`] executes exactly one HTTP call per request and maps
//! whatever happens into an [`Outcome`]:
//!
//! | What happened                              | Result                                |
//! |--------------------------------------------|---------------------------------------|
//! | 2xx, body decodes into the expected shape  | `Ok(Outcome::Success(value))`         |
//! | 2xx, body does not decode                  | `Err(ClientError::UnexpectedResponse)`|
//! | non-2xx, body is an [`ErrorEntity`]        | `Ok(Outcome::Failure(entity))`        |
//! | non-2xx, body is anything else             | `Ok(Outcome::Failure(synthesized))`   |
//! | no response (connect, DNS, timeout)        | `Ok(Outcome::Failure(status 0))`      |
//!
//! The engine keeps no state between calls and never retries.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use papertrail_client::{ApiRequest, HttpServiceEngine};
//! use papertrail_core::{domain::AuditLogRegistration, ports::HttpMethod};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let engine = HttpServiceEngine::with_reqwest()?;
//! let url = url::Url::parse("https://papertrail.example.com/api/v1/log/audit/42")?;
//! let outcome = engine
//!     .execute::<AuditLogRegistration>(ApiRequest::new(HttpMethod::Get, url))
//!     .await?;
//! println!("registered: {}", outcome.is_success());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use papertrail_core::domain::error_entity::NO_RESPONSE_STATUS;
use papertrail_core::domain::{
    AuditLogRegistration, ErrorEntity, MessageLogContent, MessageLogRegistration,
};
use papertrail_core::ports::{HeaderSet, HttpMethod, HttpRequest, HttpResponse, IHttpTransport};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::outcome::Outcome;
use crate::transport::ReqwestTransport;
use crate::ClientError;

const APPLICATION_JSON: &str = "application/json";

/// Longest slice of an undecodable error body kept in a synthesized message
const MAX_FALLBACK_MESSAGE_BYTES: usize = 512;

// ============================================================================
// Expected success shapes
// ============================================================================

/// How a 2xx response body is turned into a value
///
/// `()` means "no body expected": whatever the service sends is ignored.
/// Entities decode from JSON with all required fields enforced.
pub trait ResponseShape: Sized + Send {
    /// Human-readable shape name for logs
    const NAME: &'static str;

    /// Decodes a 2xx response body
    fn decode(body: &[u8]) -> Result<Self, serde_json::Error>;
}

impl ResponseShape for () {
    const NAME: &'static str = "no content";

    fn decode(_body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(())
    }
}

macro_rules! json_response_shape {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ResponseShape for $ty {
                const NAME: &'static str = stringify!($ty);

                fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
                    serde_json::from_slice(body)
                }
            }
        )*
    };
}

json_response_shape!(
    AuditLogRegistration,
    MessageLogRegistration,
    MessageLogContent,
    ErrorEntity,
    serde_json::Value,
);

// ============================================================================
// ApiRequest
// ============================================================================

/// A single request: method, absolute URL, headers and optional JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: HttpMethod,
    url: Url,
    headers: HeaderSet,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Creates a bodyless request
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderSet::new(),
            body: None,
        }
    }

    /// Adds a header; names are case-insensitive
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serializes `body` as the JSON request body
    ///
    /// # Errors
    /// Returns [`ClientError::Serialization`] if `body` cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        let bytes = serde_json::to_vec(body).map_err(ClientError::Serialization)?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Lowers into the transport-level request, adding the JSON headers
    fn into_http(self) -> HttpRequest {
        let mut headers = self.headers;
        headers.insert("content-type", APPLICATION_JSON);
        if !headers.contains("accept") {
            headers.insert("accept", APPLICATION_JSON);
        }

        HttpRequest {
            method: self.method,
            url: self.url.into(),
            headers,
            body: self.body,
        }
    }
}

// ============================================================================
// HttpServiceEngine
// ============================================================================

/// Executes PaperTrail requests over an [`IHttpTransport`]
///
/// Cheap to clone; clones share the same transport.
#[derive(Clone)]
pub struct HttpServiceEngine {
    transport: Arc<dyn IHttpTransport>,
}

impl HttpServiceEngine {
    /// Creates an engine over the given transport
    pub fn new(transport: Arc<dyn IHttpTransport>) -> Self {
        Self { transport }
    }

    /// Creates an engine over a default [`ReqwestTransport`]
    pub fn with_reqwest() -> Result<Self, ClientError> {
        Ok(Self::new(Arc::new(ReqwestTransport::new()?)))
    }

    /// Executes one request and classifies its outcome
    ///
    /// # Errors
    /// Only [`ClientError::UnexpectedResponse`], when a 2xx body does not
    /// match `T`. Every remote or network failure is an `Ok(Outcome::Failure)`.
    pub async fn execute<T: ResponseShape>(
        &self,
        request: ApiRequest,
    ) -> Result<Outcome<T>, ClientError> {
        let method = request.method();
        let path = request.url().path().to_string();
        debug!(%method, url = %request.url(), expected = T::NAME, "Sending PaperTrail request");

        let response = match self.transport.send(request.into_http()).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, path = %path, error = %e, "No response from PaperTrail");
                return Ok(Outcome::Failure(no_response_error(&path, &e.to_string())));
            }
        };

        debug!(%method, path = %path, status = response.status, "PaperTrail responded");
        classify(&path, response)
    }
}

impl fmt::Debug for HttpServiceEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpServiceEngine").finish_non_exhaustive()
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Maps a raw response into an [`Outcome`] of shape `T`
pub(crate) fn classify<T: ResponseShape>(
    path: &str,
    response: HttpResponse,
) -> Result<Outcome<T>, ClientError> {
    let status = response.status;

    if response.is_success() {
        return T::decode(&response.body)
            .map(Outcome::Success)
            .map_err(|source| {
                warn!(path, status, expected = T::NAME, error = %source, "Success body did not match expected shape");
                ClientError::UnexpectedResponse {
                    status,
                    path: path.to_string(),
                    source,
                }
            });
    }

    match serde_json::from_slice::<ErrorEntity>(&response.body) {
        Ok(entity) => Ok(Outcome::Failure(entity)),
        Err(e) => {
            debug!(path, status, error = %e, "Error body is not an ErrorEntity, synthesizing one");
            Ok(Outcome::Failure(synthesized_error(
                status,
                path,
                &response.body,
            )))
        }
    }
}

/// Best-effort [`ErrorEntity`] for a non-2xx response with an unusable body
fn synthesized_error(status: u16, path: &str, body: &[u8]) -> ErrorEntity {
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status");

    let message = std::str::from_utf8(body)
        .ok()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| truncate_at_char_boundary(text, MAX_FALLBACK_MESSAGE_BYTES))
        .unwrap_or_default();

    ErrorEntity::new(status, reason, message, now_timestamp(), path)
}

/// [`ErrorEntity`] for a request that never received a response
fn no_response_error(path: &str, reason: &str) -> ErrorEntity {
    ErrorEntity::new(
        NO_RESPONSE_STATUS,
        "No Response",
        reason,
        now_timestamp(),
        path,
    )
}

fn truncate_at_char_boundary(text: &str, max_bytes: usize) -> String {
    let mut end = max_bytes.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
