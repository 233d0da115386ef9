//! Messaging-platform capabilities the ticket and automod logic depend on.
//!
//! Services never talk to serenity directly; they go through [`ChannelGateway`] so the
//! lifecycle and rule code can be exercised against an in-memory fake. The production
//! implementation lives in [`discord`].

pub mod discord;
#[cfg(test)]
pub mod fake;

use chrono::{DateTime, Utc};
use serenity::async_trait;
use thiserror::Error;

pub use discord::DiscordGateway;

/// A Discord channel operation failed.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Discord rejected the request or could not be reached.
    #[error("Discord {operation} failed: {source}")]
    Request {
        /// Short name of the attempted operation
        operation: &'static str,
        #[source]
        source: Box<serenity::Error>,
    },

    /// The operation was refused without an underlying transport error.
    #[error("Discord {operation} failed: {reason}")]
    Rejected {
        operation: &'static str,
        reason: String,
    },
}

impl GatewayError {
    pub fn request(operation: &'static str, source: serenity::Error) -> Self {
        Self::Request {
            operation,
            source: Box::new(source),
        }
    }
}

/// Channel visible only to the listed members and roles.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivateChannelSpec {
    pub guild_id: u64,
    pub name: String,
    /// Category the channel is nested under.
    pub parent_id: Option<u64>,
    pub member_ids: Vec<u64>,
    pub role_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmbedSpec {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl EmbedSpec {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutboundMessage {
    pub content: Option<String>,
    pub embed: Option<EmbedSpec>,
}

impl OutboundMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
        }
    }

    pub fn embed(embed: EmbedSpec) -> Self {
        Self {
            content: None,
            embed: Some(embed),
        }
    }

    pub fn with_embed(mut self, embed: EmbedSpec) -> Self {
        self.embed = Some(embed);
        self
    }
}

/// A message read back from channel history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessage {
    pub id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    pub author_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_bot: bool,
}

#[async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Returns the first category channel whose name contains `name_fragment`,
    /// compared case-insensitively.
    async fn find_category(
        &self,
        guild_id: u64,
        name_fragment: &str,
    ) -> Result<Option<u64>, GatewayError>;

    async fn create_category(&self, guild_id: u64, name: &str) -> Result<u64, GatewayError>;

    /// Creates a text channel hidden from `@everyone` and returns its id.
    async fn create_private_channel(&self, spec: PrivateChannelSpec) -> Result<u64, GatewayError>;

    async fn delete_channel(&self, channel_id: u64) -> Result<(), GatewayError>;

    /// Posts a message and returns the new message id.
    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<u64, GatewayError>;

    /// Most recent messages first, as Discord returns them. Callers sort as needed.
    async fn fetch_recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, GatewayError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), GatewayError>;

    async fn send_direct_message(
        &self,
        user_id: u64,
        message: OutboundMessage,
    ) -> Result<(), GatewayError>;

    async fn fetch_user_name(&self, user_id: u64) -> Result<String, GatewayError>;
}
