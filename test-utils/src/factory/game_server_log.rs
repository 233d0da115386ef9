//! Game server log factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a `connect` game server log row for the given player.
///
/// # Arguments
/// - `db` - Database connection
/// - `player_id` - Player identifier; used by user data export/deletion lookups
pub async fn create_game_server_log(
    db: &DatabaseConnection,
    player_id: &str,
) -> Result<entity::game_server_logs::Model, DbErr> {
    entity::game_server_logs::ActiveModel {
        id: ActiveValue::NotSet,
        event_type: ActiveValue::Set("connect".to_string()),
        player_name: ActiveValue::Set(format!("Player {}", player_id)),
        player_id: ActiveValue::Set(Some(player_id.to_string())),
        target_name: ActiveValue::Set(None),
        target_id: ActiveValue::Set(None),
        weapon: ActiveValue::Set(None),
        money_amount: ActiveValue::Set(None),
        distance: ActiveValue::Set(None),
        server_name: ActiveValue::Set(Some("Test Server".to_string())),
        additional_data: ActiveValue::Set(None),
        timestamp: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
