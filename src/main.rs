// This is the entry point of the emoji count bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = File-backed configuration loaders
// - `discord/` = Discord-specific adapters (commands, embeds, hooks)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::emoji_count::{EmojiCountConfig, EmojiCountService};
use crate::discord::commands::{self, presence};
use crate::discord::Data;
use crate::infra::emoji_count::JsonReplyPool;
use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

const DEFAULT_PREFIX: &str = ".";

/// Settings read from the environment (and `.env`, if present).
struct BotConfig {
    token: String,
    prefix: String,
    error_replies_file: Option<String>,
    dev_guild_id: Option<u64>,
}

impl BotConfig {
    fn from_env() -> anyhow::Result<Self> {
        let token = std::env::var("DISCORD_TOKEN").context(
            "Missing DISCORD_TOKEN environment variable! Create a .env file with your bot token.",
        )?;

        let prefix = std::env::var("BOT_PREFIX")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let dev_guild_id = match std::env::var("DEV_GUILD_ID") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("DEV_GUILD_ID is not a guild id: {raw}"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            token,
            prefix,
            error_replies_file: std::env::var("EMOJI_ERROR_REPLIES_FILE").ok(),
            dev_guild_id,
        })
    }
}

/// Build the command config, swapping in a custom error title pool if one is configured.
fn emoji_count_config(error_replies_file: Option<&str>) -> EmojiCountConfig {
    let config = EmojiCountConfig::default();

    let Some(path) = error_replies_file else {
        return config;
    };

    match JsonReplyPool::new(path).load() {
        Ok(titles) => config.with_error_titles(titles),
        Err(e) => {
            tracing::warn!("Failed to load error replies from {}: {}", path, e);
            config
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists) before the
    // subscriber reads RUST_LOG.
    dotenv::dotenv().ok();

    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    let config = BotConfig::from_env()?;

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let emoji_count_service = Arc::new(EmojiCountService::new(emoji_count_config(
        config.error_replies_file.as_deref(),
    )));

    let data = Data {
        emoji_count: Arc::clone(&emoji_count_service),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT; // Required for prefix commands

    let dev_guild_id = config.dev_guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(commands::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                tracing::info!("Bot is starting up...");

                // Guild registration shows up instantly, global can take up to an hour.
                match dev_guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?;
                        tracing::info!(guild_id, "Commands registered in development guild");
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?;
                        tracing::info!("Commands registered globally");
                    }
                }

                presence::on_ready(ctx);
                tracing::info!("Bot is ready!");

                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
