use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        automod::{get_automod_settings, update_automod_settings},
        command_log::get_command_logs,
        game_server::{get_game_server_logs, ingest_game_server_log},
        mod_log::get_mod_logs,
        ticket::{close_ticket, create_ticket, get_tickets, get_transcript},
        user_data::{delete_user_data, export_user_data},
    },
    state::AppState,
};


pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/tickets", get(get_tickets).post(create_ticket))
        .route("/api/admin/tickets/{ticket_id}/close", post(close_ticket))
        .route(
            "/api/admin/tickets/{ticket_id}/transcript",
            get(get_transcript),
        )
        .route("/api/admin/mod-logs", get(get_mod_logs))
        .route("/api/admin/command-logs", get(get_command_logs))
        .route(
            "/api/admin/automod-settings/{guild_id}",
            get(get_automod_settings).put(update_automod_settings),
        )
        .route(
            "/api/admin/users/{user_id}/data",
            get(export_user_data).delete(delete_user_data),
        )
        .route("/api/admin/game-server/logs", get(get_game_server_logs))
        .route("/api/game-server/logs", post(ingest_game_server_log))
}
