use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::automod::AutoModSettings;

pub struct AutoModSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutoModSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the settings of a guild, falling back to the defaults when the guild
    /// has never been configured. Nothing is written on fallback.
    ///
    /// # Returns
    /// - `Ok(AutoModSettings)` - Stored or default settings
    /// - `Err(DbErr)` - Database error
    pub async fn get_or_default(&self, guild_id: u64) -> Result<AutoModSettings, DbErr> {
        let entity = entity::prelude::AutomodSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity
            .map(AutoModSettings::from_entity)
            .unwrap_or_default())
    }

    /// Inserts or replaces the settings of a guild.
    ///
    /// # Returns
    /// - `Ok(AutoModSettings)` - The settings as stored
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(
        &self,
        guild_id: u64,
        settings: AutoModSettings,
    ) -> Result<AutoModSettings, DbErr> {
        let entity = entity::prelude::AutomodSettings::insert(entity::automod_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            spam_detection: ActiveValue::Set(settings.spam_detection),
            profanity_filter: ActiveValue::Set(settings.profanity_filter),
            link_filter: ActiveValue::Set(settings.link_filter),
            max_mentions: ActiveValue::Set(clamp_to_i32(settings.max_mentions)),
            max_messages: ActiveValue::Set(clamp_to_i32(settings.max_messages)),
            time_window: ActiveValue::Set(clamp_to_i32(settings.time_window)),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::automod_settings::Column::GuildId)
                .update_columns([
                    entity::automod_settings::Column::SpamDetection,
                    entity::automod_settings::Column::ProfanityFilter,
                    entity::automod_settings::Column::LinkFilter,
                    entity::automod_settings::Column::MaxMentions,
                    entity::automod_settings::Column::MaxMessages,
                    entity::automod_settings::Column::TimeWindow,
                    entity::automod_settings::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(AutoModSettings::from_entity(entity))
    }
}

fn clamp_to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
