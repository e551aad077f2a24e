// Bot presence.
//
// Discord-layer glue only: we work with Discord SDK types (Context,
// ActivityData, OnlineStatus) and keep the logic short.

use poise::serenity_prelude as serenity;

/// Activity shown under the bot's name while it is online.
pub const DEFAULT_ACTIVITY: &str = "emoji categories";

/// Called once the bot is ready so the presence is set in one place.
pub fn on_ready(ctx: &serenity::Context) {
    let activity = serenity::ActivityData::watching(DEFAULT_ACTIVITY);
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}
