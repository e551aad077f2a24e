// The emoji count service - runs one invocation of the command from start to
// finish: fetch the guild's emoji, pick the categories the user asked about,
// group the emoji and build either a summary or an "invalid category" reply.
//
// Randomness is passed in by the caller so tests can seed it.

use super::emoji_count_models::{
    EmojiCountConfig, GuildEmoji, ReplyKind, ReplyPayload, DEFAULT_ERROR_REPLIES, SUMMARY_TITLE,
};
use super::emoji_count_ports::{EmojiCountError, EmojiSource, ReplySink};
use super::emoji_grouping::{distinct_categories, group_emojis, resolve_candidates, CategoryGroups};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

pub struct EmojiCountService {
    config: EmojiCountConfig,
}

impl EmojiCountService {
    pub fn new(config: EmojiCountConfig) -> Self {
        Self { config }
    }

    /// Run the command for `guild_id` and send the reply.
    ///
    /// Returns which kind of reply went out. Failures from the source or the
    /// sink are passed straight back to the caller.
    pub async fn count_emojis<S, K, R>(
        &self,
        source: &S,
        sink: &K,
        guild_id: u64,
        filter: Option<&str>,
        rng: &mut R,
    ) -> Result<ReplyKind, EmojiCountError>
    where
        S: EmojiSource + ?Sized,
        K: ReplySink + ?Sized,
        R: Rng + Send + ?Sized,
    {
        match filter {
            Some(filter) => tracing::trace!(guild_id, filter, "Emoji category provided"),
            None => tracing::trace!(guild_id, "No emoji category provided"),
        }

        let emojis = source.guild_emojis(guild_id).await?;
        let payload = self.build_report(&emojis, filter, rng, Utc::now());
        let kind = payload.kind;

        sink.send(payload).await?;
        tracing::trace!(guild_id, ?kind, "Emoji count reply sent");

        Ok(kind)
    }

    /// Build the reply for a snapshot of emoji without sending it.
    pub fn build_report<R: Rng + ?Sized>(
        &self,
        emojis: &[GuildEmoji],
        filter: Option<&str>,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> ReplyPayload {
        let groups = group_emojis(resolve_candidates(emojis, filter), emojis);

        if groups.is_empty() {
            self.invalid_category_reply(emojis, rng)
        } else {
            self.summary_reply(&groups, rng, now)
        }
    }

    /// Reply with the count of each category.
    ///
    /// A single category gets a random member as thumbnail; several
    /// categories get one random member inline per line instead.
    pub fn summary_reply<R: Rng + ?Sized>(
        &self,
        groups: &CategoryGroups,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> ReplyPayload {
        let mut thumbnail = None;
        let mut entries = groups.iter();

        let description = match (entries.next(), entries.next()) {
            (Some((category, members)), None) => {
                thumbnail = members.choose(rng).map(|emoji| emoji.url.clone());
                count_line(category, members.len())
            }
            _ => groups
                .iter()
                .map(|(category, members)| {
                    let line = count_line(category, members.len());
                    match members.choose(rng) {
                        Some(emoji) => format!("{} {}\n", emoji.inline_reference(), line),
                        None => format!("{}\n", line),
                    }
                })
                .collect(),
        };

        tracing::trace!(categories = groups.len(), "Emoji summary built");

        ReplyPayload {
            kind: ReplyKind::Summary,
            title: SUMMARY_TITLE.to_string(),
            description,
            colour: self.config.success_colour,
            timestamp: Some(now),
            thumbnail,
        }
    }

    /// Reply listing every category in the guild, ignoring the filter.
    pub fn invalid_category_reply<R: Rng + ?Sized>(
        &self,
        emojis: &[GuildEmoji],
        rng: &mut R,
    ) -> ReplyPayload {
        let valid = distinct_categories(emojis).join(", ");
        let title = self
            .config
            .error_titles
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ERROR_REPLIES[0].to_string());

        tracing::trace!("Invalid emoji category reply built");

        ReplyPayload {
            kind: ReplyKind::InvalidCategory,
            title,
            description: format!("These are the valid categories\n```{}```", valid),
            colour: self.config.error_colour,
            timestamp: None,
            thumbnail: None,
        }
    }
}

fn count_line(category: &str, count: usize) -> String {
    format!(
        "There are **{}** emojis in the **{}** category",
        count, category
    )
}

// ============================================================================
// TESTS
// ============================================================================
