//! Stored message content
//!
//! PaperTrail keeps a copy of each message so edits and deletions can be
//! reported with the original text. Content may be absent when the bot was
//! unable to read it or the text was redacted.

use serde::{Deserialize, Serialize};

use super::newtypes::SnowflakeId;

/// A logged message and its author
///
/// Wire shape: `{"messageId": "...", "messageContent": "..." | null, "authorId": "..."}`.
/// A missing content is serialized as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageLogContent {
    message_id: SnowflakeId,
    #[serde(default)]
    message_content: Option<String>,
    author_id: SnowflakeId,
}

impl MessageLogContent {
    /// Creates a new content record
    pub fn new(
        message_id: SnowflakeId,
        message_content: Option<String>,
        author_id: SnowflakeId,
    ) -> Self {
        Self {
            message_id,
            message_content,
            author_id,
        }
    }

    pub fn message_id(&self) -> &SnowflakeId {
        &self.message_id
    }

    /// The message text, if it was captured
    pub fn message_content(&self) -> Option<&str> {
        self.message_content.as_deref()
    }

    pub fn author_id(&self) -> &SnowflakeId {
        &self.author_id
    }
}
