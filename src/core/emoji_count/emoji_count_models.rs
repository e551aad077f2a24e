// Domain models for the emoji count command.
// Like the rest of `core/`, nothing in here knows about serenity or poise:
// emoji are plain snapshots and replies are plain payloads that the Discord
// layer turns into embeds.

use chrono::{DateTime, Utc};

/// Accent colour for a successful count (orange).
pub const SUCCESS_COLOUR: u32 = 0xE67E22;

/// Accent colour for the "no such category" reply (soft red).
pub const ERROR_COLOUR: u32 = 0xCD6D6D;

/// Title shared by every successful count reply.
pub const SUMMARY_TITLE: &str = "Emoji Count";

/// Titles picked at random for the invalid category reply.
pub const DEFAULT_ERROR_REPLIES: [&str; 10] = [
    "Please don't do that.",
    "You have to stop.",
    "Do you mind?",
    "In the future, don't do that.",
    "That was a mistake.",
    "You blew it.",
    "You're bad at computers.",
    "Are you trying to kill me?",
    "Noooooo!!",
    "I can't believe you've done this",
];

/// A snapshot of one custom emoji in a guild.
///
/// Names conventionally follow `<category>_<rest>`, e.g. `tech_rust`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildEmoji {
    pub id: u64,
    pub name: String,
    /// CDN URL of the emoji image, used as an embed thumbnail.
    pub url: String,
    pub animated: bool,
}

impl GuildEmoji {
    /// Inline chat markup that renders the emoji, e.g. `<:tech_rust:1234>`.
    ///
    /// Animated emoji need the `a` marker or the client shows a still frame.
    pub fn inline_reference(&self) -> String {
        if self.animated {
            format!("<a:{}:{}>", self.name, self.id)
        } else {
            format!("<:{}:{}>", self.name, self.id)
        }
    }
}

/// Which branch of the command produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Counts for one or more categories.
    Summary,
    /// The filter matched no category; the reply lists the valid ones.
    InvalidCategory,
}

/// Everything the reply sink needs to render a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPayload {
    pub kind: ReplyKind,
    pub title: String,
    pub description: String,
    pub colour: u32,
    pub timestamp: Option<DateTime<Utc>>,
    pub thumbnail: Option<String>,
}

/// Fixed presentation data for the command.
#[derive(Debug, Clone)]
pub struct EmojiCountConfig {
    pub success_colour: u32,
    pub error_colour: u32,
    pub error_titles: Vec<String>,
}

impl Default for EmojiCountConfig {
    fn default() -> Self {
        Self {
            success_colour: SUCCESS_COLOUR,
            error_colour: ERROR_COLOUR,
            error_titles: DEFAULT_ERROR_REPLIES
                .iter()
                .map(|title| title.to_string())
                .collect(),
        }
    }
}

impl EmojiCountConfig {
    /// Replace the error title pool. An empty pool keeps the built-in titles.
    pub fn with_error_titles(mut self, titles: Vec<String>) -> Self {
        if !titles.is_empty() {
            self.error_titles = titles;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emoji(name: &str, id: u64, animated: bool) -> GuildEmoji {
        GuildEmoji {
            id,
            name: name.to_string(),
            url: format!("https://cdn.discordapp.com/emojis/{}.png", id),
            animated,
        }
    }

    #[test]
    fn static_emoji_renders_plain_markup() {
        assert_eq!(
            emoji("tech_rust", 42, false).inline_reference(),
            "<:tech_rust:42>"
        );
    }

    #[test]
    fn animated_emoji_renders_with_marker() {
        assert_eq!(
            emoji("fun_party", 7, true).inline_reference(),
            "<a:fun_party:7>"
        );
    }

    #[test]
    fn default_config_uses_builtin_titles() {
        let config = EmojiCountConfig::default();
        assert_eq!(config.error_titles.len(), DEFAULT_ERROR_REPLIES.len());
        assert_eq!(config.success_colour, SUCCESS_COLOUR);
        assert_eq!(config.error_colour, ERROR_COLOUR);
    }

    #[test]
    fn empty_title_pool_is_ignored() {
        let config = EmojiCountConfig::default().with_error_titles(Vec::new());
        assert_eq!(config.error_titles.len(), DEFAULT_ERROR_REPLIES.len());

        let config = EmojiCountConfig::default().with_error_titles(vec!["Nope.".to_string()]);
        assert_eq!(config.error_titles, vec!["Nope.".to_string()]);
    }
}
