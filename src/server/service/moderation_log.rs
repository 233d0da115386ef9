use sea_orm::DatabaseConnection;

use crate::server::{
    data::mod_log::ModLogRepository,
    error::AppError,
    model::mod_log::{CreateModLogParams, ModLogEntry},
};

/// Maximum number of entries returned by the recent log query.
pub const RECENT_MOD_LOG_LIMIT: u64 = 100;

/// Write-through activity logger for moderation actions.
pub struct ModLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to the moderation log.
    ///
    /// # Returns
    /// - `Ok(ModLogEntry)` - The stored entry
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn record(&self, params: CreateModLogParams) -> Result<ModLogEntry, AppError> {
        let action = params.action;
        let entry = ModLogRepository::new(self.db).create(params).await?;

        tracing::debug!(
            "Recorded {} by {} in guild {}",
            action,
            entry.moderator_id,
            entry.guild_id
        );

        Ok(entry)
    }

    /// Gets the newest entries first.
    pub async fn recent(&self) -> Result<Vec<ModLogEntry>, AppError> {
        Ok(ModLogRepository::new(self.db)
            .recent(RECENT_MOD_LOG_LIMIT)
            .await?)
    }
}
