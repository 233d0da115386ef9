use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::command_log::CommandLogDto,
    server::{
        error::AppError, middleware::auth::AdminGuard, model::command_log::CommandLogEntry,
        service::command_log::CommandLogService, state::AppState,
    },
};

/// List the most recent slash command invocations, newest first.
pub async fn get_command_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;

    let entries = CommandLogService::new(&state.db).recent().await?;

    let dtos: Vec<CommandLogDto> = entries
        .into_iter()
        .map(CommandLogEntry::into_dto)
        .collect();

    Ok(Json(dtos))
}
