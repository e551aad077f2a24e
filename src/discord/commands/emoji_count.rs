// The emoji count command.
//
// Same pattern as every other command: pull primitives out of the poise
// context, hand them to the core service, and let the adapters deal with
// serenity on the way in and out.

use crate::core::emoji_count::EmojiCountError;
use crate::discord::emoji_adapters::{PoiseReplySink, SerenityEmojiSource};
use crate::discord::{Context, Error};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Count the server's emojis by category (the part of the name before the first `_`).
#[poise::command(prefix_command, slash_command, guild_only, aliases("ec"))]
pub async fn emoji_count(
    ctx: Context<'_>,
    #[description = "Category to count; leave empty to show every category"]
    #[rest]
    category: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or(EmojiCountError::MissingGuild)?.get();

    let source = SerenityEmojiSource::new(ctx.http());
    let sink = PoiseReplySink::new(ctx);
    // StdRng rather than thread_rng so the future stays Send.
    let mut rng = StdRng::from_entropy();

    let kind = ctx
        .data()
        .emoji_count
        .count_emojis(&source, &sink, guild_id, category.as_deref(), &mut rng)
        .await?;

    tracing::debug!(guild_id, ?kind, "Emoji count command finished");
    Ok(())
}
