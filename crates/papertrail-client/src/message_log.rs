//! Message-log registration client
//!
//! Registers a guild so PaperTrail reports edited and deleted messages in a
//! channel. Pairs with [`MessageLogContentClient`](crate::MessageLogContentClient),
//! which stores the message text those reports are built from.
//!
//! | Operation                   | Method | Path                            |
//! |-----------------------------|--------|---------------------------------|
//! | [`register_guild`]          | POST   | `api/v1/log/message`            |
//! | [`get_registered_guild`]    | GET    | `api/v1/log/message/{guildId}`  |
//! | [`update_registered_guild`] | PUT    | `api/v1/log/message`            |
//! | [`delete_registered_guild`] | DELETE | `api/v1/log/message/{guildId}`  |
//!
//! These routes are assumed, not published: the service documents only the
//! message-log registration body. They mirror the audit-log routes under
//! `log/message`. If a deployment differs, requests fail as ordinary
//! [`Outcome::Failure`](crate::Outcome::Failure) values (typically 404).
//!
//! [`register_guild`]: MessageLogRegistrationClient::register_guild
//! [`get_registered_guild`]: MessageLogRegistrationClient::get_registered_guild
//! [`update_registered_guild`]: MessageLogRegistrationClient::update_registered_guild
//! [`delete_registered_guild`]: MessageLogRegistrationClient::delete_registered_guild

use std::sync::Arc;

use papertrail_core::domain::{MessageLogRegistration, SnowflakeId};
use papertrail_core::ports::IHttpTransport;
use tracing::debug;

use crate::base_url::parse_base_url;
use crate::engine::HttpServiceEngine;
use crate::resource::ResourceEndpoint;
use crate::ClientError;

/// Assumed collection route, mirroring `api/v1/log/audit`
const MESSAGE_LOG_PATH: &str = "api/v1/log/message";

/// Client for guild message-log registrations
#[derive(Debug, Clone)]
pub struct MessageLogRegistrationClient {
    endpoint: ResourceEndpoint,
}

impl MessageLogRegistrationClient {
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
            endpoint: ResourceEndpoint::new(engine, base, MESSAGE_LOG_PATH)?,
        })
    }

    /// Registers `guild_id` to have its message log posted in `channel_id`
    ///
    /// Returns `Ok(true)` if the service accepted the registration and
    /// `Ok(false)` for any remote or network failure.
    pub async fn register_guild(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<bool, ClientError> {
        let registration = registration(guild_id, channel_id)?;

        let outcome = self
            .endpoint
            .create::<_, MessageLogRegistration>(&registration)
            .await?
            .inspect_failure(|failure| {
                debug!(guild_id, %failure, "Failed to register guild for message logging");
            });

        Ok(outcome.is_success())
    }

    /// Looks up the message-log registration of `guild_id`
    ///
    /// Returns `Ok(None)` when the guild is not registered or the service
    /// could not be reached.
    pub async fn get_registered_guild(
        &self,
        guild_id: &str,
    ) -> Result<Option<MessageLogRegistration>, ClientError> {
        let guild_id = SnowflakeId::new(guild_id).map_err(ClientError::invalid_argument("guildId"))?;

        let outcome = self
            .endpoint
            .read::<MessageLogRegistration>(guild_id.as_str())
            .await?
            .inspect_failure(|failure| {
                debug!(%guild_id, %failure, "No message-log registration found for guild");
            });

        Ok(outcome.success())
    }

    /// Moves the message log of an already registered `guild_id` to `channel_id`
    pub async fn update_registered_guild(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<bool, ClientError> {
        let registration = registration(guild_id, channel_id)?;

        let outcome = self
            .endpoint
            .update::<_, MessageLogRegistration>(&registration)
            .await?
            .inspect_failure(|failure| {
                debug!(guild_id, %failure, "Failed to update message-log registration");
            });

        Ok(outcome.is_success())
    }

    /// Removes the message-log registration of `guild_id`
    pub async fn delete_registered_guild(&self, guild_id: &str) -> Result<bool, ClientError> {
        let guild_id = SnowflakeId::new(guild_id).map_err(ClientError::invalid_argument("guildId"))?;

        let outcome = self
            .endpoint
            .delete(guild_id.as_str())
            .await?
            .inspect_failure(|failure| {
                debug!(%guild_id, %failure, "Failed to delete message-log registration");
            });

        Ok(outcome.is_success())
    }
}

fn registration(guild_id: &str, channel_id: &str) -> Result<MessageLogRegistration, ClientError> {
    Ok(MessageLogRegistration::new(
        SnowflakeId::new(guild_id).map_err(ClientError::invalid_argument("guildId"))?,
        SnowflakeId::new(channel_id).map_err(ClientError::invalid_argument("channelId"))?,
    ))
}
