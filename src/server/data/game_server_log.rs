use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::game_server_log::{CreateGameServerLogParams, GameServerLog};

pub struct GameServerLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameServerLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores one forwarded game-server event, timestamped on arrival.
    pub async fn create(&self, params: CreateGameServerLogParams) -> Result<GameServerLog, DbErr> {
        let entity = entity::game_server_logs::ActiveModel {
            event_type: ActiveValue::Set(params.event_type),
            player_name: ActiveValue::Set(params.player_name),
            player_id: ActiveValue::Set(params.player_id),
            target_name: ActiveValue::Set(params.target_name),
            target_id: ActiveValue::Set(params.target_id),
            weapon: ActiveValue::Set(params.weapon),
            money_amount: ActiveValue::Set(params.money_amount),
            distance: ActiveValue::Set(params.distance),
            server_name: ActiveValue::Set(params.server_name),
            additional_data: ActiveValue::Set(params.additional_data),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GameServerLog::from_entity(entity))
    }

    pub async fn recent(&self, limit: u64) -> Result<Vec<GameServerLog>, DbErr> {
        let entities = entity::prelude::GameServerLogs::find()
            .order_by_desc(entity::game_server_logs::Column::Timestamp)
            .order_by_desc(entity::game_server_logs::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameServerLog::from_entity).collect())
    }

    /// Gets every event where the user is the acting player.
    pub async fn find_by_player(&self, player_id: &str) -> Result<Vec<GameServerLog>, DbErr> {
        let entities = entity::prelude::GameServerLogs::find()
            .filter(entity::game_server_logs::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::game_server_logs::Column::Timestamp)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameServerLog::from_entity).collect())
    }
}
