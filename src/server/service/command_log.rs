use sea_orm::DatabaseConnection;

use crate::server::{
    data::command_log::CommandLogRepository,
    error::AppError,
    model::command_log::{CommandLogEntry, CreateCommandLogParams},
};

/// Maximum number of invocations returned by the recent log query.
pub const RECENT_COMMAND_LOG_LIMIT: u64 = 100;

/// Audit trail of slash command invocations.
pub struct CommandLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(&self, params: CreateCommandLogParams) -> Result<CommandLogEntry, AppError> {
        let entry = CommandLogRepository::new(self.db).create(params).await?;

        tracing::debug!(
            "Recorded /{} by {} in channel {}",
            entry.command_name,
            entry.user_id,
            entry.channel_id
        );

        Ok(entry)
    }

    /// Gets the newest invocations first.
    pub async fn recent(&self) -> Result<Vec<CommandLogEntry>, AppError> {
        Ok(CommandLogRepository::new(self.db)
            .recent(RECENT_COMMAND_LOG_LIMIT)
            .await?)
    }
}
