//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Registers the
//! slash commands in the configured guild; guild commands update immediately,
//! unlike global ones.

use serenity::all::{ActivityData, Context, GuildId, Ready};

use super::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
/// - `guild_id` - Guild receiving the slash commands
pub async fn handle_ready(ctx: Context, ready: Ready, guild_id: u64) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("for /ticket")));

    match GuildId::new(guild_id)
        .set_commands(&ctx.http, command::definitions())
        .await
    {
        Ok(commands) => tracing::info!(
            "Registered {} slash commands in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register slash commands in guild {}: {}", guild_id, e),
    }
}
