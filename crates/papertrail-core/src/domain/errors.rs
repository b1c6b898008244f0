//! Domain error types
//!
//! Errors raised while constructing domain values. These are always local
//! faults: a value that fails validation is never sent over the wire.

use thiserror::Error;

/// Errors that can occur while building domain values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required identifier was empty or only whitespace
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// A required text field was missing
    #[error("Missing required field: {0}")]
    MissingField(String),
}
