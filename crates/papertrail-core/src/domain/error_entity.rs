//! Structured error body returned by the PaperTrail service
//!
//! Every non-2xx response from the service carries this shape. When a
//! response cannot be decoded as one, the client synthesizes an instance so
//! callers always observe failures through a single type.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Status sentinel used when no HTTP response was received at all
pub const NO_RESPONSE_STATUS: u16 = 0;

/// The service's error payload
///
/// Wire shape: `{"status": 404, "error": "...", "message": "...", "timeStamp": "...", "path": "..."}`.
/// All five fields are required; `null` strings are rejected on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntity {
    status: u16,
    error: String,
    message: String,
    time_stamp: String,
    path: String,
}

impl ErrorEntity {
    pub fn new(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        time_stamp: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
            time_stamp: time_stamp.into(),
            path: path.into(),
        }
    }

    /// HTTP status code, or [`NO_RESPONSE_STATUS`] if the request never got one
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Error category (typically the HTTP reason phrase)
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// ISO-8601 timestamp of the failure
    pub fn time_stamp(&self) -> &str {
        &self.time_stamp
    }

    /// Request path the error refers to
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true if the request never produced an HTTP response
    pub fn is_no_response(&self) -> bool {
        self.status == NO_RESPONSE_STATUS
    }
}

impl Display for ErrorEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.status, self.error, self.path)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}
