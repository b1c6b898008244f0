//! PaperTrail Client - HTTP client for the PaperTrail logging service
//!
//! Provides async clients for:
//! - Registering guilds for audit-log and message-log forwarding
//! - Storing, retrieving, updating and deleting logged message content
//!
//! ## Modules
//!
//! - [`engine`] - Request engine that executes one call and classifies its outcome
//! - [`outcome`] - The success-or-failure value every call produces
//! - [`transport`] - reqwest adapter for the [`IHttpTransport`] port
//! - [`audit_log`], [`message_log`], [`message_content`] - Resource clients
//!
//! ## Error model
//!
//! Remote failures (non-2xx responses, unreachable service) are never
//! errors: the engine returns them as [`Outcome::Failure`] and the resource
//! clients collapse them to `false` or `None`. [`ClientError`] is reserved
//! for local faults: a bad base URL, a blank identifier, or a 2xx response
//! whose body does not match the expected entity.
//!
//! [`IHttpTransport`]: papertrail_core::ports::IHttpTransport

pub mod audit_log;
pub mod base_url;
pub mod engine;
pub mod message_content;
pub mod message_log;
pub mod outcome;
mod resource;
pub mod transport;

pub use audit_log::AuditLogRegistrationClient;
pub use engine::{ApiRequest, HttpServiceEngine, ResponseShape};
pub use message_content::MessageLogContentClient;
pub use message_log::MessageLogRegistrationClient;
pub use outcome::Outcome;
pub use transport::ReqwestTransport;

use papertrail_core::domain::DomainError;
use thiserror::Error;

/// Local faults raised by the PaperTrail clients
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL is missing, blank or not an absolute hierarchical URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A required call argument failed validation; nothing was sent
    #[error("Invalid argument '{field}': {source}")]
    InvalidArgument {
        /// Name of the offending parameter
        field: &'static str,
        /// The underlying validation failure
        #[source]
        source: DomainError,
    },

    /// The request body could not be encoded as JSON; nothing was sent
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The service reported success but the body did not match the expected shape
    #[error("Unexpected response body for {path} (HTTP {status}): {source}")]
    UnexpectedResponse {
        /// HTTP status of the response
        status: u16,
        /// Request path
        path: String,
        /// Decoding failure
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP transport could not be constructed
    #[error("Failed to build HTTP transport: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Helper for wrapping a validation failure of parameter `field`
    pub(crate) fn invalid_argument(field: &'static str) -> impl FnOnce(DomainError) -> Self {
        move |source| ClientError::InvalidArgument { field, source }
    }

    /// Returns true if the error indicates a client/server contract mismatch
    pub fn is_contract_mismatch(&self) -> bool {
        matches!(self, ClientError::UnexpectedResponse { .. })
    }
}
