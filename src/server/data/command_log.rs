use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::command_log::{CommandLogEntry, CreateCommandLogParams};

/// Append-only access to the slash command audit log.
pub struct CommandLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an invocation timestamped with the current time.
    pub async fn create(&self, params: CreateCommandLogParams) -> Result<CommandLogEntry, DbErr> {
        let arguments = (!params.arguments.is_empty()).then_some(params.arguments);

        let entity = entity::command_logs::ActiveModel {
            command_name: ActiveValue::Set(params.command_name),
            user_id: ActiveValue::Set(params.user_id.to_string()),
            username: ActiveValue::Set(params.username),
            channel_id: ActiveValue::Set(params.channel_id.to_string()),
            channel_name: ActiveValue::Set(params.channel_name),
            guild_id: ActiveValue::Set(params.guild_id.map(|id| id.to_string())),
            arguments: ActiveValue::Set(arguments),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CommandLogEntry::from_entity(entity))
    }

    /// Gets the newest invocations first.
    pub async fn recent(&self, limit: u64) -> Result<Vec<CommandLogEntry>, DbErr> {
        let entities = entity::prelude::CommandLogs::find()
            .order_by_desc(entity::command_logs::Column::Timestamp)
            .order_by_desc(entity::command_logs::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(CommandLogEntry::from_entity)
            .collect())
    }

    /// Gets every invocation by a user, newest first.
    pub async fn find_by_user(&self, user_id: u64) -> Result<Vec<CommandLogEntry>, DbErr> {
        let entities = entity::prelude::CommandLogs::find()
            .filter(entity::command_logs::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::command_logs::Column::Timestamp)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(CommandLogEntry::from_entity)
            .collect())
    }
}
