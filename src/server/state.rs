//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::ticket::TicketDesk;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TicketDesk` holds its gateway, locks and settings behind `Arc`s
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Ticket lifecycle collaborators, shared with the Discord bot.
    ///
    /// Sharing the desk means tickets opened through the admin API and through
    /// `/ticket` are serialized by the same per-requester locks.
    pub ticket_desk: TicketDesk,

    /// Guild tickets created through the admin API are opened in.
    pub guild_id: u64,

    /// Bearer token required on every `/api/admin/*` route.
    pub admin_api_token: String,

    /// Shared secret expected in game-server log bodies; `None` rejects all ingestion.
    pub game_server_auth_token: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        ticket_desk: TicketDesk,
        guild_id: u64,
        admin_api_token: String,
        game_server_auth_token: Option<String>,
    ) -> Self {
        Self {
            db,
            ticket_desk,
            guild_id,
            admin_api_token,
            game_server_auth_token,
        }
    }
}
