use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::mod_log::{CreateModLogParams, ModLogEntry};

/// Append-only access to the moderation activity log.
pub struct ModLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry timestamped with the current time.
    ///
    /// # Returns
    /// - `Ok(ModLogEntry)` - The stored entry
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, params: CreateModLogParams) -> Result<ModLogEntry, DbErr> {
        let entity = entity::mod_logs::ActiveModel {
            action_type: ActiveValue::Set(params.action.as_str().to_string()),
            moderator_id: ActiveValue::Set(params.moderator_id),
            target_id: ActiveValue::Set(params.target_id.map(|id| id.to_string())),
            reason: ActiveValue::Set(params.reason),
            duration: ActiveValue::Set(params.duration),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ModLogEntry::from_entity(entity))
    }

    /// Gets the newest entries first.
    pub async fn recent(&self, limit: u64) -> Result<Vec<ModLogEntry>, DbErr> {
        let entities = entity::prelude::ModLogs::find()
            .order_by_desc(entity::mod_logs::Column::Timestamp)
            .order_by_desc(entity::mod_logs::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ModLogEntry::from_entity).collect())
    }

    /// Gets every entry targeting a user, newest first.
    pub async fn find_by_target(&self, target_id: u64) -> Result<Vec<ModLogEntry>, DbErr> {
        let entities = entity::prelude::ModLogs::find()
            .filter(entity::mod_logs::Column::TargetId.eq(target_id.to_string()))
            .order_by_desc(entity::mod_logs::Column::Timestamp)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ModLogEntry::from_entity).collect())
    }
}
