//! Message content client
//!
//! Stores the text of messages so later edits and deletions can be reported
//! with what was originally said.
//!
//! | Operation            | Method | Path                                  |
//! |----------------------|--------|---------------------------------------|
//! | [`log_message`]      | POST   | `api/v1/content/message`              |
//! | [`retrieve_message`] | GET    | `api/v1/content/message/{messageId}`  |
//! | [`update_message`]   | PUT    | `api/v1/content/message`              |
//! | [`delete_message`]   | DELETE | `api/v1/content/message/{messageId}`  |
//!
//! [`log_message`]: MessageLogContentClient::log_message
//! [`retrieve_message`]: MessageLogContentClient::retrieve_message
//! [`update_message`]: MessageLogContentClient::update_message
//! [`delete_message`]: MessageLogContentClient::delete_message

use std::sync::Arc;

use papertrail_core::domain::{MessageLogContent, SnowflakeId};
use papertrail_core::ports::IHttpTransport;
use tracing::debug;

use crate::base_url::parse_base_url;
use crate::engine::HttpServiceEngine;
use crate::resource::ResourceEndpoint;
use crate::ClientError;

const MESSAGE_CONTENT_PATH: &str = "api/v1/content/message";

/// Client for stored message content
#[derive(Debug, Clone)]
pub struct MessageLogContentClient {
    endpoint: ResourceEndpoint,
}

impl MessageLogContentClient {
    /// Creates a client over a default reqwest transport
    ///
    /// # Errors
    /// [`ClientError::InvalidBaseUrl`] if `base_url` is blank or not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = parse_base_url(base_url)?;
        Self::build(&base, HttpServiceEngine::with_reqwest()?)
    }

    /// Creates a client that sends through `transport`
    pub fn with_transport(
        base_url: &str,
        transport: Arc<dyn IHttpTransport>,
    ) -> Result<Self, ClientError> {
        Self::with_engine(base_url, HttpServiceEngine::new(transport))
    }

    /// Creates a client sharing an existing engine
    pub fn with_engine(base_url: &str, engine: HttpServiceEngine) -> Result<Self, ClientError> {
        let base = parse_base_url(base_url)?;
        Self::build(&base, engine)
    }

    fn build(base: &url::Url, engine: HttpServiceEngine) -> Result<Self, ClientError> {
        Ok(Self {
            endpoint: ResourceEndpoint::new(engine, base, MESSAGE_CONTENT_PATH)?,
        })
    }

    /// Logs a new message
    ///
    /// `message_content` may be `None` when the text is unavailable or
    /// redacted; it is sent as an explicit `null`.
    ///
    /// # Returns
    /// `Ok(true)` if the message was stored, `Ok(false)` otherwise.
    pub async fn log_message(
        &self,
        message_id: &str,
        message_content: Option<&str>,
        author_id: &str,
    ) -> Result<bool, ClientError> {
        let content = content(message_id, message_content, author_id)?;

        let outcome = self
            .endpoint
            .create::<_, MessageLogContent>(&content)
            .await?
            .inspect_failure(|failure| {
                debug!(message_id, %failure, "Failed to log message");
            });

        Ok(outcome.is_success())
    }

    /// Retrieves a logged message by id
    ///
    /// Returns `Ok(None)` if the message is unknown or the service could not
    /// be reached.
    pub async fn retrieve_message(
        &self,
        message_id: &str,
    ) -> Result<Option<MessageLogContent>, ClientError> {
        let message_id =
            SnowflakeId::new(message_id).map_err(ClientError::invalid_argument("messageId"))?;

        let outcome = self
            .endpoint
            .read::<MessageLogContent>(message_id.as_str())
            .await?
            .inspect_failure(|failure| {
                debug!(%message_id, %failure, "Message could not be retrieved");
            });

        Ok(outcome.success())
    }

    /// Replaces the stored text of an already logged message
    ///
    /// Unlike [`log_message`](Self::log_message) the new content is required.
    pub async fn update_message(
        &self,
        message_id: &str,
        message_content: &str,
        author_id: &str,
    ) -> Result<bool, ClientError> {
        let content = content(message_id, Some(message_content), author_id)?;

        let outcome = self
            .endpoint
            .update::<_, MessageLogContent>(&content)
            .await?
            .inspect_failure(|failure| {
                debug!(message_id, %failure, "Failed to update message");
            });

        Ok(outcome.is_success())
    }

    /// Deletes a logged message by id
    pub async fn delete_message(&self, message_id: &str) -> Result<bool, ClientError> {
        let message_id =
            SnowflakeId::new(message_id).map_err(ClientError::invalid_argument("messageId"))?;

        let outcome = self
            .endpoint
            .delete(message_id.as_str())
            .await?
            .inspect_failure(|failure| {
                debug!(%message_id, %failure, "Failed to delete message");
            });

        Ok(outcome.is_success())
    }
}

fn content(
    message_id: &str,
    message_content: Option<&str>,
    author_id: &str,
) -> Result<MessageLogContent, ClientError> {
    Ok(MessageLogContent::new(
        SnowflakeId::new(message_id).map_err(ClientError::invalid_argument("messageId"))?,
        message_content.map(str::to_owned),
        SnowflakeId::new(author_id).map_err(ClientError::invalid_argument("authorId"))?,
    ))
}
