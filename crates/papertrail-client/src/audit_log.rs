//! Audit-log registration client
//!
//! Registers a guild so PaperTrail forwards its audit-log events to a
//! channel.
//!
//! | Operation                   | Method | Path                          |
//! |-----------------------------|--------|-------------------------------|
//! | [`register_guild`]          | POST   | `api/v1/log/audit`            |
//! | [`get_registered_guild`]    | GET    | `api/v1/log/audit/{guildId}`  |
//! | [`update_registered_guild`] | PUT    | `api/v1/log/audit`            |
//! | [`delete_registered_guild`] | DELETE | `api/v1/log/audit/{guildId}`  |
//!
//! [`register_guild`]: AuditLogRegistrationClient::register_guild
//! [`get_registered_guild`]: AuditLogRegistrationClient::get_registered_guild
//! [`update_registered_guild`]: AuditLogRegistrationClient::update_registered_guild
//! [`delete_registered_guild`]: AuditLogRegistrationClient::delete_registered_guild

use std::sync::Arc;

use papertrail_core::domain::{AuditLogRegistration, SnowflakeId};
use papertrail_core::ports::IHttpTransport;
use tracing::debug;

use crate::base_url::parse_base_url;
use crate::engine::HttpServiceEngine;
use crate::resource::ResourceEndpoint;
use crate::ClientError;

const AUDIT_LOG_PATH: &str = "api/v1/log/audit";

/// Client for guild audit-log registrations
#[derive(Debug, Clone)]
pub struct AuditLogRegistrationClient {
    endpoint: ResourceEndpoint,
}

impl AuditLogRegistrationClient {
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
            endpoint: ResourceEndpoint::new(engine, base, AUDIT_LOG_PATH)?,
        })
    }

    /// Registers `guild_id` to have its audit log posted in `channel_id`
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
            .create::<_, AuditLogRegistration>(&registration)
            .await?
            .inspect_failure(|failure| {
                debug!(guild_id, %failure, "Failed to register guild for audit logging");
            });

        Ok(outcome.is_success())
    }

    /// Looks up the audit-log registration of `guild_id`
    ///
    /// Returns `Ok(None)` when the guild is not registered or the service
    /// could not be reached.
    pub async fn get_registered_guild(
        &self,
        guild_id: &str,
    ) -> Result<Option<AuditLogRegistration>, ClientError> {
        let guild_id = SnowflakeId::new(guild_id).map_err(ClientError::invalid_argument("guildId"))?;

        let outcome = self
            .endpoint
            .read::<AuditLogRegistration>(guild_id.as_str())
            .await?
            .inspect_failure(|failure| {
                debug!(%guild_id, %failure, "No audit-log registration found for guild");
            });

        Ok(outcome.success())
    }

    /// Moves the audit log of an already registered `guild_id` to `channel_id`
    pub async fn update_registered_guild(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<bool, ClientError> {
        let registration = registration(guild_id, channel_id)?;

        let outcome = self
            .endpoint
            .update::<_, AuditLogRegistration>(&registration)
            .await?
            .inspect_failure(|failure| {
                debug!(guild_id, %failure, "Failed to update audit-log registration");
            });

        Ok(outcome.is_success())
    }

    /// Removes the audit-log registration of `guild_id`
    pub async fn delete_registered_guild(&self, guild_id: &str) -> Result<bool, ClientError> {
        let guild_id = SnowflakeId::new(guild_id).map_err(ClientError::invalid_argument("guildId"))?;

        let outcome = self
            .endpoint
            .delete(guild_id.as_str())
            .await?
            .inspect_failure(|failure| {
                debug!(%guild_id, %failure, "Failed to delete audit-log registration");
            });

        Ok(outcome.is_success())
    }
}

fn registration(guild_id: &str, channel_id: &str) -> Result<AuditLogRegistration, ClientError> {
    Ok(AuditLogRegistration::new(
        SnowflakeId::new(guild_id).map_err(ClientError::invalid_argument("guildId"))?,
        SnowflakeId::new(channel_id).map_err(ClientError::invalid_argument("channelId"))?,
    ))
}
