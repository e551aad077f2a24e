// Discord commands module.
// Each feature gets its own command file; shared framework types live here.

use crate::core::emoji_count::EmojiCountService;
use std::sync::Arc;

pub mod emoji_count;

pub mod presence;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Shared state handed to every command by poise.
pub struct Data {
    pub emoji_count: Arc<EmojiCountService>,
}

/// Every command the bot registers.
pub fn all_commands() -> Vec<poise::Command<Data, Error>> {
    vec![emoji_count::emoji_count()]
}

/// Log command failures, then let poise's default handler answer the user.
pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    if let poise::FrameworkError::Command { error, ctx, .. } = &error {
        tracing::error!(
            command = %ctx.command().qualified_name,
            "Command failed: {}",
            error
        );
    }

    if let Err(e) = poise::builtins::on_error(error).await {
        tracing::error!("Error while handling framework error: {}", e);
    }
}
