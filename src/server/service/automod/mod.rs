//! Automatic moderation of inbound chat messages.
//!
//! `rules` decides; `AutoModService` gathers the inputs for a decision and carries
//! out the side effects of a deny. `settings` manages the per-guild configuration.

pub mod rules;
pub mod settings;


use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::automod_settings::AutoModSettingsRepository,
    error::AppError,
    gateway::{ChannelGateway, ChannelMessage, EmbedSpec, OutboundMessage},
    model::{
        automod::{ContentRules, Verdict},
        message::InboundMessage,
        mod_log::{CreateModLogParams, ModLogAction},
    },
    service::moderation_log::ModLogService,
};

/// Number of recent channel messages inspected by the spam rule.
const RATE_HISTORY_LIMIT: u8 = 100;
/// Longest excerpt of a removed message mirrored to the mod-log channel.
const MAX_EXCERPT_LEN: usize = 1000;
const AUTOMOD_COLOR: u32 = 0xFF6B35;

/// Process-wide collaborators shared by every `AutoModService`.
#[derive(Clone)]
pub struct AutoModEngine {
    gateway: Arc<dyn ChannelGateway>,
    rules: Arc<ContentRules>,
    mod_log_channel_id: Option<u64>,
}

impl AutoModEngine {
    pub fn new(
        gateway: Arc<dyn ChannelGateway>,
        rules: ContentRules,
        mod_log_channel_id: Option<u64>,
    ) -> Self {
        Self {
            gateway,
            rules: Arc::new(rules),
            mod_log_channel_id,
        }
    }

    pub fn from_config(gateway: Arc<dyn ChannelGateway>, config: &Config) -> Self {
        Self::new(
            gateway,
            ContentRules {
                profanity: config.profanity_words.clone(),
                allowed_domains: config.allowed_link_domains.clone(),
            },
            config.mod_log_channel_id,
        )
    }
}

pub struct AutoModService<'a> {
    db: &'a DatabaseConnection,
    engine: &'a AutoModEngine,
}

impl<'a> AutoModService<'a> {
    pub fn new(db: &'a DatabaseConnection, engine: &'a AutoModEngine) -> Self {
        Self { db, engine }
    }

    /// Judges an inbound message and enforces a deny.
    ///
    /// On deny the message is deleted, an `automod_delete` entry is logged with the
    /// bot as actor, the author is notified by DM and a record is mirrored into the
    /// mod-log channel. Each of these is attempted independently; failures are logged
    /// and do not change the verdict.
    ///
    /// # Arguments
    /// - `message` - The inbound message
    /// - `bot_user_id` - Discord ID of the bot, recorded as the acting moderator
    ///
    /// # Returns
    /// - `Ok(Verdict)` - The decision
    /// - `Err(AppError::DbErr)` - Guild settings could not be loaded; nothing enforced
    pub async fn moderate(
        &self,
        message: &InboundMessage,
        bot_user_id: u64,
    ) -> Result<Verdict, AppError> {
        let Some(guild_id) = message.guild_id else {
            return Ok(Verdict::Allow);
        };
        if message.author_is_bot {
            return Ok(Verdict::Allow);
        }

        let settings = AutoModSettingsRepository::new(self.db)
            .get_or_default(guild_id)
            .await?;

        let recent = if settings.spam_detection {
            self.recent_history(message.channel_id).await
        } else {
            Vec::new()
        };

        let verdict = rules::evaluate(message, &settings, &self.engine.rules, &recent);

        if let Verdict::Deny(reasons) = &verdict {
            let reason = reasons
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            tracing::info!(
                "AutoMod removed message {} from {} in guild {}: {}",
                message.id,
                message.author_id,
                guild_id,
                reason
            );

            self.enforce(message, guild_id, bot_user_id, &reason).await;
        }

        Ok(verdict)
    }

    /// An unreadable history counts as empty; the other rules still apply.
    async fn recent_history(&self, channel_id: u64) -> Vec<ChannelMessage> {
        match self
            .engine
            .gateway
            .fetch_recent_messages(channel_id, RATE_HISTORY_LIMIT)
            .await
        {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!("Failed to fetch history of channel {}: {}", channel_id, e);
                Vec::new()
            }
        }
    }

    async fn enforce(&self, message: &InboundMessage, guild_id: u64, bot_user_id: u64, reason: &str) {
        let gateway = &self.engine.gateway;

        if let Err(e) = gateway.delete_message(message.channel_id, message.id).await {
            tracing::error!("Failed to delete message {}: {}", message.id, e);
        }

        if let Err(e) = ModLogService::new(self.db)
            .record(CreateModLogParams {
                action: ModLogAction::AutomodDelete,
                moderator_id: bot_user_id.to_string(),
                target_id: Some(message.author_id),
                reason: Some(reason.to_string()),
                duration: None,
                guild_id,
            })
            .await
        {
            tracing::error!("Failed to log automod action on message {}: {}", message.id, e);
        }

        if let Err(e) = gateway
            .send_direct_message(
                message.author_id,
                OutboundMessage::text(format!(
                    "Your message in <#{}> was removed by AutoMod: {}",
                    message.channel_id, reason
                )),
            )
            .await
        {
            tracing::debug!("Could not DM {} about removed message: {}", message.author_id, e);
        }

        if let Some(channel_id) = self.engine.mod_log_channel_id {
            let embed = EmbedSpec::new("AutoMod Action", AUTOMOD_COLOR)
                .field(
                    "User",
                    format!("{} ({})", message.author_name, message.author_id),
                    true,
                )
                .field("Channel", format!("<#{}>", message.channel_id), true)
                .field("Reason", reason, false)
                .field("Content", excerpt(&message.content), false)
                .timestamp(message.timestamp);

            if let Err(e) = gateway
                .send_message(channel_id, OutboundMessage::embed(embed))
                .await
            {
                tracing::error!("Failed to mirror automod action to mod-log channel: {}", e);
            }
        }
    }
}

/// Embed field values may not be empty and are capped in length.
fn excerpt(content: &str) -> String {
    if content.is_empty() {
        return "(no text)".to_string();
    }
    if content.chars().count() <= MAX_EXCERPT_LEN {
        return content.to_string();
    }

    let mut excerpt: String = content.chars().take(MAX_EXCERPT_LEN - 1).collect();
    excerpt.push('…');
    excerpt
}
