use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::mod_log::ModLogDto,
    server::{
        error::AppError, middleware::auth::AdminGuard, model::mod_log::ModLogEntry,
        service::moderation_log::ModLogService, state::AppState,
    },
};

/// List the most recent moderation log entries, newest first.
pub async fn get_mod_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;

    let entries = ModLogService::new(&state.db).recent().await?;

    let dtos: Vec<ModLogDto> = entries.into_iter().map(ModLogEntry::into_dto).collect();

    Ok(Json(dtos))
}
