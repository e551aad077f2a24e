// Ports for the emoji count command.
// The core asks for a snapshot of a guild's emoji and hands back a reply
// payload; the Discord layer decides how both actually happen.

use super::emoji_count_models::{GuildEmoji, ReplyPayload};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum EmojiCountError {
    #[error("Could not fetch guild emojis: {0}")]
    Source(String),
    #[error("Could not deliver reply: {0}")]
    Delivery(String),
    #[error("This command only works in servers")]
    MissingGuild,
}

/// Read-only snapshot of the custom emoji in a guild.
#[async_trait]
pub trait EmojiSource: Send + Sync {
    /// All emoji of the guild, in the order the platform lists them.
    async fn guild_emojis(&self, guild_id: u64) -> Result<Vec<GuildEmoji>, EmojiCountError>;
}

/// Delivers a reply to wherever the command was invoked.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send(&self, payload: ReplyPayload) -> Result<(), EmojiCountError>;
}
