// Serenity/poise implementations of the emoji count ports.

use crate::core::emoji_count::{
    EmojiCountError, EmojiSource, GuildEmoji, ReplyPayload, ReplySink,
};
use crate::discord::Context;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

/// Fetches a guild's emoji over HTTP.
///
/// The HTTP endpoint returns emoji in the guild's own order, unlike the cache
/// which keeps them in a hash map.
pub struct SerenityEmojiSource<'a> {
    http: &'a serenity::Http,
}

impl<'a> SerenityEmojiSource<'a> {
    pub fn new(http: &'a serenity::Http) -> Self {
        Self { http }
    }
}

#[async_trait]
impl EmojiSource for SerenityEmojiSource<'_> {
    async fn guild_emojis(&self, guild_id: u64) -> Result<Vec<GuildEmoji>, EmojiCountError> {
        let emojis = serenity::GuildId::new(guild_id)
            .emojis(self.http)
            .await
            .map_err(|e| EmojiCountError::Source(e.to_string()))?;

        tracing::trace!(guild_id, count = emojis.len(), "Fetched guild emojis");
        Ok(emojis.into_iter().map(to_guild_emoji).collect())
    }
}

fn to_guild_emoji(emoji: serenity::Emoji) -> GuildEmoji {
    GuildEmoji {
        id: emoji.id.get(),
        url: emoji.url(),
        animated: emoji.animated,
        name: emoji.name,
    }
}

/// Replies to the invoking prefix or slash command with an embed.
pub struct PoiseReplySink<'a> {
    ctx: Context<'a>,
}

impl<'a> PoiseReplySink<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ReplySink for PoiseReplySink<'_> {
    async fn send(&self, payload: ReplyPayload) -> Result<(), EmojiCountError> {
        self.ctx
            .send(poise::CreateReply::default().embed(render_embed(&payload)))
            .await
            .map(|_| ())
            .map_err(|e| EmojiCountError::Delivery(e.to_string()))
    }
}

/// Turn a reply payload into a Discord embed.
pub fn render_embed(payload: &ReplyPayload) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(payload.title.clone())
        .description(payload.description.clone())
        .colour(payload.colour);

    if let Some(generated_at) = payload.timestamp {
        let timestamp = serenity::Timestamp::from_unix_timestamp(generated_at.timestamp())
            .unwrap_or_else(|_| serenity::Timestamp::now());
        embed = embed.timestamp(timestamp);
    }

    if let Some(url) = &payload.thumbnail {
        embed = embed.thumbnail(url.clone());
    }

    embed
}
