//! Moderation log factory for creating test log entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a moderation log entry with the given action and target.
///
/// Moderator defaults to `"1"` and guild to `"1"`.
///
/// # Arguments
/// - `db` - Database connection
/// - `action_type` - Logged action (e.g. `"kick"`, `"automod_delete"`)
/// - `target_id` - Discord ID of the affected user, if any
pub async fn create_mod_log(
    db: &DatabaseConnection,
    action_type: &str,
    target_id: Option<&str>,
) -> Result<entity::mod_logs::Model, DbErr> {
    entity::mod_logs::ActiveModel {
        id: ActiveValue::NotSet,
        action_type: ActiveValue::Set(action_type.to_string()),
        moderator_id: ActiveValue::Set("1".to_string()),
        target_id: ActiveValue::Set(target_id.map(str::to_string)),
        reason: ActiveValue::Set(Some("Test reason".to_string())),
        duration: ActiveValue::Set(None),
        guild_id: ActiveValue::Set("1".to_string()),
        timestamp: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
