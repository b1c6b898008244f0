//! Domain newtypes with validation
//!
//! Discord identifiers (guilds, channels, messages, users) are snowflakes
//! transported as decimal strings. The SDK treats them as opaque text and
//! only guarantees they are present.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// A non-blank Discord snowflake identifier
///
/// Deserialization goes through [`SnowflakeId::new`], so a payload carrying
/// an empty or whitespace-only id is rejected at decode time just like a
/// locally constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SnowflakeId(String);

impl SnowflakeId {
    /// Create a new SnowflakeId
    ///
    /// # Errors
    /// Returns error if the id is empty or only whitespace
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidId(
                "Identifier cannot be empty".to_string(),
            ));
        }

        Ok(Self(id))
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SnowflakeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnowflakeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SnowflakeId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SnowflakeId> for String {
    fn from(id: SnowflakeId) -> Self {
        id.0
    }
}

impl AsRef<str> for SnowflakeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
