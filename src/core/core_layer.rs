// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "emoji_count/mod.rs"]
pub mod emoji_count;
