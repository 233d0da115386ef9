use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::server::{
    error::AppError, middleware::auth::AdminGuard, service::user_data::UserDataService,
    state::AppState, util::parse::parse_id_param,
};

/// Export everything stored about a user.
///
/// # Returns
/// - `200 OK` - Tickets, moderation entries targeting the user and game-server events
/// - `400 Bad Request` - User ID is not a snowflake
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `500 Internal Server Error` - Database error
pub async fn export_user_data(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;
    let user_id = parse_id_param("user ID", &user_id)?;

    let export = UserDataService::new(&state.db).export(user_id).await?;

    Ok(Json(export.into_dto()))
}

/// Delete everything stored about a user in one transaction.
///
/// # Returns
/// - `200 OK` - Number of removed rows per table
/// - `400 Bad Request` - User ID is not a snowflake
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `500 Internal Server Error` - Database error; nothing was deleted
pub async fn delete_user_data(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;
    let user_id = parse_id_param("user ID", &user_id)?;

    let deleted = UserDataService::new(&state.db).delete(user_id).await?;

    Ok(Json(deleted.into_dto()))
}
