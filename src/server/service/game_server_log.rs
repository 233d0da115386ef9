use sea_orm::DatabaseConnection;

use crate::{
    model::game_server::IngestGameServerLogDto,
    server::{
        data::game_server_log::GameServerLogRepository,
        error::{auth::AuthError, AppError},
        model::game_server_log::{CreateGameServerLogParams, GameServerLog},
    },
};

/// Maximum number of events returned by the recent log query.
pub const RECENT_GAME_SERVER_LOG_LIMIT: u64 = 100;

pub struct GameServerLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameServerLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an event forwarded by the game server.
    ///
    /// The shared secret in the body must equal the configured token exactly. With
    /// no token configured every request is rejected.
    ///
    /// # Arguments
    /// - `dto` - The ingestion body, including its `auth_token`
    /// - `expected_token` - `GAME_SERVER_AUTH_TOKEN`, if configured
    ///
    /// # Returns
    /// - `Ok(GameServerLog)` - The stored event
    /// - `Err(AppError::AuthErr)` - Token missing or mismatched; nothing written
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn ingest(
        &self,
        dto: IngestGameServerLogDto,
        expected_token: Option<&str>,
    ) -> Result<GameServerLog, AppError> {
        match expected_token {
            Some(expected) if expected == dto.auth_token => {}
            _ => return Err(AuthError::InvalidToken("game server").into()),
        }

        let log = GameServerLogRepository::new(self.db)
            .create(CreateGameServerLogParams::from_dto(dto))
            .await?;

        tracing::debug!("Stored {} event for {}", log.event_type, log.player_name);

        Ok(log)
    }

    pub async fn recent(&self) -> Result<Vec<GameServerLog>, AppError> {
        Ok(GameServerLogRepository::new(self.db)
            .recent(RECENT_GAME_SERVER_LOG_LIMIT)
            .await?)
    }
}
