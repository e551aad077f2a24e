pub mod emoji_count_models;
pub mod emoji_count_ports;
pub mod emoji_count_service;
pub mod emoji_grouping;

pub use emoji_count_models::{EmojiCountConfig, GuildEmoji, ReplyKind, ReplyPayload};
pub use emoji_count_ports::{EmojiCountError, EmojiSource, ReplySink};
pub use emoji_count_service::EmojiCountService;
