// Discord layer - commands, serenity adapters and framework hooks.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "emoji_count/emoji_adapters.rs"]
pub mod emoji_adapters;

// Re-export command types for convenience
pub use commands::{Context, Data, Error};
