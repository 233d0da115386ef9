use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::server::{
    model::message::InboundMessage,
    service::automod::{AutoModEngine, AutoModService},
};

/// Handle message creation in a channel
///
/// Every guild message from a non-bot author is run through AutoMod. A failure to
/// load the guild's settings is logged and the message is left alone.
pub async fn handle_message(
    db: &DatabaseConnection,
    automod: &AutoModEngine,
    ctx: Context,
    message: Message,
) {
    if message.guild_id.is_none() || message.author.bot {
        return;
    }

    let bot_user_id = ctx.cache.current_user().id.get();
    let inbound = InboundMessage::from(&message);

    if let Err(e) = AutoModService::new(db, automod)
        .moderate(&inbound, bot_user_id)
        .await
    {
        tracing::error!("AutoMod failed for message {}: {}", inbound.id, e);
    }
}
