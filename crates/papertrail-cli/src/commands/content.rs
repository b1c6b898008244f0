//! Content command - Manage logged message content
//!
//! Provides the `papertrail content` CLI command which stores the text of a
//! message, reads it back, replaces it after an edit, or removes it.

use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use crate::context::CommandContext;

#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// Log a new message
    Log {
        /// Message id
        message_id: String,
        /// Author (user) id
        author_id: String,
        /// Message text; omitted when unavailable
        #[arg(long)]
        content: Option<String>,
    },
    /// Show a logged message
    Get {
        /// Message id
        message_id: String,
    },
    /// Replace the text of a logged message
    Update {
        /// Message id
        message_id: String,
        /// Author (user) id
        author_id: String,
        /// New message text
        content: String,
    },
    /// Remove a logged message
    Delete {
        /// Message id
        message_id: String,
    },
}

impl ContentCommand {
    /// Execute the content command
    ///
    /// Returns `Ok(false)` when the service answered negatively.
    pub async fn execute(&self, ctx: &CommandContext) -> Result<bool> {
        let client = ctx.content_client()?;

        match self {
            ContentCommand::Log {
                message_id,
                author_id,
                content,
            } => {
                info!(%message_id, %author_id, has_content = content.is_some(), "Logging message");
                let ok = client
                    .log_message(message_id, content.as_deref(), author_id)
                    .await?;
                ctx.report(
                    ok,
                    &format!("Logged message {message_id}"),
                    &format!("Could not log message {message_id}"),
                );
                Ok(ok)
            }
            ContentCommand::Get { message_id } => {
                let message = client.retrieve_message(message_id).await?;
                match &message {
                    Some(found) => ctx.emit(&ctx.format().record(
                        &format!("Message {}", found.message_id()),
                        &[
                            ("Author", found.author_id().as_str()),
                            (
                                "Content",
                                found.message_content().unwrap_or("(not available)"),
                            ),
                        ],
                        serde_json::json!({
                            "messageId": found.message_id().as_str(),
                            "messageContent": found.message_content(),
                            "authorId": found.author_id().as_str(),
                        }),
                    )),
                    None => ctx.emit(
                        &ctx.format()
                            .outcome(false, &format!("Message {message_id} was not found")),
                    ),
                }
                Ok(message.is_some())
            }
            ContentCommand::Update {
                message_id,
                author_id,
                content,
            } => {
                info!(%message_id, %author_id, "Updating message");
                let ok = client
                    .update_message(message_id, content, author_id)
                    .await?;
                ctx.report(
                    ok,
                    &format!("Updated message {message_id}"),
                    &format!("Could not update message {message_id}"),
                );
                Ok(ok)
            }
            ContentCommand::Delete { message_id } => {
                info!(%message_id, "Deleting message");
                let ok = client.delete_message(message_id).await?;
                ctx.report(
                    ok,
                    &format!("Deleted message {message_id}"),
                    &format!("Could not delete message {message_id}"),
                );
                Ok(ok)
            }
        }
    }
}
