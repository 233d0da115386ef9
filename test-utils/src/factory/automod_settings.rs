//! Automod settings factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for per-guild automod settings rows.
///
/// Defaults mirror the values applied when a guild has no row at all.
pub struct AutomodSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    spam_detection: bool,
    profanity_filter: bool,
    link_filter: bool,
    max_mentions: i32,
    max_messages: i32,
    time_window: i32,
}

impl<'a> AutomodSettingsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            spam_detection: true,
            profanity_filter: true,
            link_filter: false,
            max_mentions: 5,
            max_messages: 10,
            time_window: 10,
        }
    }

    pub fn spam_detection(mut self, enabled: bool) -> Self {
        self.spam_detection = enabled;
        self
    }

    pub fn profanity_filter(mut self, enabled: bool) -> Self {
        self.profanity_filter = enabled;
        self
    }

    pub fn link_filter(mut self, enabled: bool) -> Self {
        self.link_filter = enabled;
        self
    }

    pub fn max_mentions(mut self, max_mentions: i32) -> Self {
        self.max_mentions = max_mentions;
        self
    }

    pub fn rate_limit(mut self, max_messages: i32, time_window: i32) -> Self {
        self.max_messages = max_messages;
        self.time_window = time_window;
        self
    }

    pub async fn build(self) -> Result<entity::automod_settings::Model, DbErr> {
        entity::automod_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            spam_detection: ActiveValue::Set(self.spam_detection),
            profanity_filter: ActiveValue::Set(self.profanity_filter),
            link_filter: ActiveValue::Set(self.link_filter),
            max_mentions: ActiveValue::Set(self.max_mentions),
            max_messages: ActiveValue::Set(self.max_messages),
            time_window: ActiveValue::Set(self.time_window),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates default automod settings for a guild.
pub async fn create_automod_settings(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::automod_settings::Model, DbErr> {
    AutomodSettingsFactory::new(db, guild_id).build().await
}
