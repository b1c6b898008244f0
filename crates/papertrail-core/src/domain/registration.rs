//! Guild registration entities
//!
//! A registration binds a guild to the channel where PaperTrail posts its
//! logs. Audit-log and message-log registrations share the same wire shape
//! but live under different endpoints, so they are distinct types.

use serde::{Deserialize, Serialize};

use super::newtypes::SnowflakeId;

/// Registration of a guild for audit-log forwarding
///
/// Wire shape: `{"guildId": "...", "channelId": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogRegistration {
    guild_id: SnowflakeId,
    channel_id: SnowflakeId,
}

impl AuditLogRegistration {
    /// Creates a new registration for `guild_id` logging into `channel_id`
    pub fn new(guild_id: SnowflakeId, channel_id: SnowflakeId) -> Self {
        Self {
            guild_id,
            channel_id,
        }
    }

    /// The registered guild
    pub fn guild_id(&self) -> &SnowflakeId {
        &self.guild_id
    }

    /// The channel audit-log entries are posted to
    pub fn channel_id(&self) -> &SnowflakeId {
        &self.channel_id
    }
}

/// Registration of a guild for message-log forwarding
///
/// Wire shape: `{"guildId": "...", "channelId": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageLogRegistration {
    guild_id: SnowflakeId,
    channel_id: SnowflakeId,
}

impl MessageLogRegistration {
    /// Creates a new registration for `guild_id` logging into `channel_id`
    pub fn new(guild_id: SnowflakeId, channel_id: SnowflakeId) -> Self {
        Self {
            guild_id,
            channel_id,
        }
    }

    /// The registered guild
    pub fn guild_id(&self) -> &SnowflakeId {
        &self.guild_id
    }

    /// The channel message-log entries are posted to
    pub fn channel_id(&self) -> &SnowflakeId {
        &self.channel_id
    }
}
