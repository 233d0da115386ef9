use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::game_server::{GameServerLogDto, IngestGameServerLogDto, IngestedLogDto},
    server::{
        error::AppError, middleware::auth::AdminGuard, model::game_server_log::GameServerLog,
        service::game_server_log::GameServerLogService, state::AppState,
    },
};

/// Ingest an event forwarded by the game server.
///
/// Not behind the admin token; the body's `auth_token` must equal the configured
/// `GAME_SERVER_AUTH_TOKEN`.
///
/// # Returns
/// - `201 Created` - ID of the stored event
/// - `401 Unauthorized` - Token mismatch or ingestion not configured
/// - `500 Internal Server Error` - Database error
pub async fn ingest_game_server_log(
    State(state): State<AppState>,
    Json(payload): Json<IngestGameServerLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let log = GameServerLogService::new(&state.db)
        .ingest(payload, state.game_server_auth_token.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(IngestedLogDto { id: log.id })))
}

/// List the most recent game-server events, newest first.
pub async fn get_game_server_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;

    let logs = GameServerLogService::new(&state.db).recent().await?;

    let dtos: Vec<GameServerLogDto> = logs.into_iter().map(GameServerLog::into_dto).collect();

    Ok(Json(dtos))
}
