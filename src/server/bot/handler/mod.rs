use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;

use crate::server::service::{automod::AutoModEngine, ticket::TicketDesk};

pub mod command;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub desk: TicketDesk,
    pub automod: AutoModEngine,
    /// Guild the slash commands are registered in.
    pub guild_id: u64,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        desk: TicketDesk,
        automod: AutoModEngine,
        guild_id: u64,
    ) -> Self {
        Self {
            db,
            desk,
            automod,
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.guild_id).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, &self.automod, ctx, message).await;
    }

    /// Called for slash commands and other interactions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            command::handle_command(self, ctx, command).await;
        }
    }
}
