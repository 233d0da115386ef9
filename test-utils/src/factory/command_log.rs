//! Command log factory for creating slash command audit rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a command log row for `command_name` invoked by `user_id`.
///
/// Channel defaults to `"10"` (`general`) and guild to `"1"`.
pub async fn create_command_log(
    db: &DatabaseConnection,
    command_name: &str,
    user_id: &str,
) -> Result<entity::command_logs::Model, DbErr> {
    entity::command_logs::ActiveModel {
        id: ActiveValue::NotSet,
        command_name: ActiveValue::Set(command_name.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        username: ActiveValue::Set(format!("user{}", user_id)),
        channel_id: ActiveValue::Set("10".to_string()),
        channel_name: ActiveValue::Set(Some("general".to_string())),
        guild_id: ActiveValue::Set(Some("1".to_string())),
        arguments: ActiveValue::Set(None),
        timestamp: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
