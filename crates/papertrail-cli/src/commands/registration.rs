//! Registration commands - Manage audit-log and message-log registrations
//!
//! Backs both `papertrail audit` and `papertrail message-log`; the two
//! services share one command shape and differ only in the client used.

use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use papertrail_client::{AuditLogRegistrationClient, ClientError, MessageLogRegistrationClient};
use papertrail_core::domain::{AuditLogRegistration, MessageLogRegistration};
use tracing::info;

use crate::context::CommandContext;

/// Which registration service a command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    Audit,
    MessageLog,
}

impl RegistrationKind {
    fn label(self) -> &'static str {
        match self {
            RegistrationKind::Audit => "audit log",
            RegistrationKind::MessageLog => "message log",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum RegistrationCommand {
    /// Register a guild and its logging channel
    Register {
        /// Guild (server) id
        guild_id: String,
        /// Channel that receives the log
        channel_id: String,
    },
    /// Show the registration of a guild
    Get {
        /// Guild (server) id
        guild_id: String,
    },
    /// Move a registered guild to another channel
    Update {
        /// Guild (server) id
        guild_id: String,
        /// New logging channel
        channel_id: String,
    },
    /// Remove the registration of a guild
    Delete {
        /// Guild (server) id
        guild_id: String,
    },
}

/// Guild/channel pair as returned by either registration service
struct Registration {
    guild_id: String,
    channel_id: String,
}

impl From<AuditLogRegistration> for Registration {
    fn from(entity: AuditLogRegistration) -> Self {
        Self {
            guild_id: entity.guild_id().to_string(),
            channel_id: entity.channel_id().to_string(),
        }
    }
}

impl From<MessageLogRegistration> for Registration {
    fn from(entity: MessageLogRegistration) -> Self {
        Self {
            guild_id: entity.guild_id().to_string(),
            channel_id: entity.channel_id().to_string(),
        }
    }
}

/// Operations both registration clients provide
#[async_trait]
trait RegistrationApi: Send + Sync {
    async fn register(&self, guild_id: &str, channel_id: &str) -> Result<bool, ClientError>;
    async fn get(&self, guild_id: &str) -> Result<Option<Registration>, ClientError>;
    async fn update(&self, guild_id: &str, channel_id: &str) -> Result<bool, ClientError>;
    async fn delete(&self, guild_id: &str) -> Result<bool, ClientError>;
}

macro_rules! registration_api {
    ($client:ty) => {
        #[async_trait]
        impl RegistrationApi for $client {
            async fn register(
                &self,
                guild_id: &str,
                channel_id: &str,
            ) -> Result<bool, ClientError> {
                self.register_guild(guild_id, channel_id).await
            }
            async fn get(&self, guild_id: &str) -> Result<Option<Registration>, ClientError> {
                Ok(self.get_registered_guild(guild_id).await?.map(Registration::from))
            }
            async fn update(
                &self,
                guild_id: &str,
                channel_id: &str,
            ) -> Result<bool, ClientError> {
                self.update_registered_guild(guild_id, channel_id).await
            }
            async fn delete(&self, guild_id: &str) -> Result<bool, ClientError> {
                self.delete_registered_guild(guild_id).await
            }
        }
    };
}

registration_api!(AuditLogRegistrationClient);
registration_api!(MessageLogRegistrationClient);

impl RegistrationCommand {
    /// Execute the command against the `kind` service
    ///
    /// Returns `Ok(false)` when the service answered negatively.
    pub async fn execute(&self, kind: RegistrationKind, ctx: &CommandContext) -> Result<bool> {
        match kind {
            RegistrationKind::Audit => self.run(kind, &ctx.audit_log_client()?, ctx).await,
            RegistrationKind::MessageLog => self.run(kind, &ctx.message_log_client()?, ctx).await,
        }
    }

    async fn run(
        &self,
        kind: RegistrationKind,
        client: &dyn RegistrationApi,
        ctx: &CommandContext,
    ) -> Result<bool> {
        let label = kind.label();

        match self {
            RegistrationCommand::Register {
                guild_id,
                channel_id,
            } => {
                info!(%guild_id, %channel_id, service = label, "Registering guild");
                let ok = client.register(guild_id, channel_id).await?;
                ctx.report(
                    ok,
                    &format!("Registered guild {guild_id} for {label} in channel {channel_id}"),
                    &format!("Could not register guild {guild_id} for {label}"),
                );
                Ok(ok)
            }
            RegistrationCommand::Get { guild_id } => {
                let registration = client.get(guild_id).await?;
                match &registration {
                    Some(found) => ctx.emit(&ctx.format().record(
                        &format!("Guild {} is registered for {label}", found.guild_id),
                        &[("Channel", found.channel_id.as_str())],
                        serde_json::json!({
                            "guildId": found.guild_id,
                            "channelId": found.channel_id,
                        }),
                    )),
                    None => ctx.emit(&ctx.format().outcome(
                        false,
                        &format!("Guild {guild_id} is not registered for {label}"),
                    )),
                }
                Ok(registration.is_some())
            }
            RegistrationCommand::Update {
                guild_id,
                channel_id,
            } => {
                info!(%guild_id, %channel_id, service = label, "Updating registration");
                let ok = client.update(guild_id, channel_id).await?;
                ctx.report(
                    ok,
                    &format!("Guild {guild_id} now logs {label} to channel {channel_id}"),
                    &format!("Could not update {label} registration of guild {guild_id}"),
                );
                Ok(ok)
            }
            RegistrationCommand::Delete { guild_id } => {
                info!(%guild_id, service = label, "Deleting registration");
                let ok = client.delete(guild_id).await?;
                ctx.report(
                    ok,
                    &format!("Removed {label} registration of guild {guild_id}"),
                    &format!("Could not remove {label} registration of guild {guild_id}"),
                );
                Ok(ok)
            }
        }
    }
}
