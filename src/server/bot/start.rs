use serenity::all::{Client, GatewayIntents};

use crate::server::error::AppError;

use super::handler::Handler;

/// Starts the Discord bot in a blocking manner
///
/// This function creates and starts the Discord bot client. It should be called from within
/// a tokio::spawn task since it will block until the bot shuts down.
///
/// # Arguments
/// - `token` - Discord bot token
/// - `handler` - Event handler wired to the shared services
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(token: &str, handler: Handler) -> Result<(), AppError> {
    // MESSAGE_CONTENT is privileged; without it AutoMod only sees empty messages
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
