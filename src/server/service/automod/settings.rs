use sea_orm::DatabaseConnection;

use crate::server::{
    data::automod_settings::AutoModSettingsRepository, error::AppError,
    model::automod::AutoModSettings,
};

/// Longest accepted rate window, in seconds.
const MAX_TIME_WINDOW: u32 = 3600;

pub struct AutoModSettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutoModSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's settings, or the defaults when none are stored.
    pub async fn get(&self, guild_id: u64) -> Result<AutoModSettings, AppError> {
        Ok(AutoModSettingsRepository::new(self.db)
            .get_or_default(guild_id)
            .await?)
    }

    /// Validates and stores a guild's settings.
    ///
    /// # Returns
    /// - `Ok(AutoModSettings)` - The stored settings
    /// - `Err(AppError::BadRequest)` - Rate limit or window out of range
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        guild_id: u64,
        settings: AutoModSettings,
    ) -> Result<AutoModSettings, AppError> {
        if settings.max_messages == 0 {
            return Err(AppError::BadRequest(
                "max_messages must be at least 1".to_string(),
            ));
        }
        if settings.time_window == 0 || settings.time_window > MAX_TIME_WINDOW {
            return Err(AppError::BadRequest(format!(
                "time_window must be between 1 and {} seconds",
                MAX_TIME_WINDOW
            )));
        }

        let stored = AutoModSettingsRepository::new(self.db)
            .upsert(guild_id, settings)
            .await?;
        tracing::info!("Updated automod settings for guild {}", guild_id);

        Ok(stored)
    }
}
