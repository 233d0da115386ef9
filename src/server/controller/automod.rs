use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::automod::AutoModSettingsDto,
    server::{
        error::AppError,
        middleware::auth::AdminGuard,
        model::automod::AutoModSettings,
        service::automod::settings::AutoModSettingsService,
        state::AppState,
        util::parse::parse_id_param,
    },
};

/// Get the AutoMod settings of a guild, or the defaults if none are stored.
///
/// # Returns
/// - `200 OK` - The settings
/// - `400 Bad Request` - Guild ID is not a snowflake
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `500 Internal Server Error` - Database error
pub async fn get_automod_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;
    let guild_id = parse_id_param("guild ID", &guild_id)?;

    let settings = AutoModSettingsService::new(&state.db).get(guild_id).await?;

    Ok(Json(settings.into_dto()))
}

/// Create or replace the AutoMod settings of a guild.
///
/// # Returns
/// - `200 OK` - The stored settings
/// - `400 Bad Request` - Invalid guild ID, rate limit or window
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `500 Internal Server Error` - Database error
pub async fn update_automod_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<String>,
    Json(payload): Json<AutoModSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_token, &headers).require()?;
    let guild_id = parse_id_param("guild ID", &guild_id)?;

    let settings = AutoModSettingsService::new(&state.db)
        .update(guild_id, AutoModSettings::from_dto(payload))
        .await?;

    Ok(Json(settings.into_dto()))
}
