use chrono::{DateTime, Utc};
use serenity::all::Message;

/// An inbound chat message as seen by the automod rules.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub id: u64,
    pub channel_id: u64,
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub author_id: u64,
    pub author_name: String,
    pub author_is_bot: bool,
    pub content: String,
    pub mention_ids: Vec<u64>,
    pub timestamp: DateTime<Utc>,
}

impl From<&Message> for InboundMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.get(),
            channel_id: message.channel_id.get(),
            guild_id: message.guild_id.map(|id| id.get()),
            author_id: message.author.id.get(),
            author_name: message.author.name.clone(),
            author_is_bot: message.author.bot,
            content: message.content.clone(),
            mention_ids: message.mentions.iter().map(|user| user.id.get()).collect(),
            timestamp: *message.timestamp,
        }
    }
}
