// The infra module holds implementations that talk to the outside world
// (files, databases, APIs) without knowing about Discord.

#[path = "emoji_count/json_reply_pool.rs"]
pub mod emoji_count;
