//! Ticket lifecycle errors.
//!
//! Both variants are expected outcomes of user input rather than faults, so they map
//! to client-error status codes and carry a message suitable for showing to the
//! requester in Discord.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum TicketError {
    /// The requester already owns a ticket in the open state.
    #[error("User {user_id} already has an open ticket")]
    Duplicate { user_id: u64 },

    /// The referenced ticket does not exist or has already been closed.
    #[error("Ticket {0} not found or already closed")]
    NotOpen(String),
}

impl TicketError {
    /// Message shown to the Discord user who triggered the error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Duplicate { .. } => "You already have an open ticket!",
            Self::NotOpen(_) => "This is not an open ticket channel.",
        }
    }
}

/// - `Duplicate` → 409 Conflict
/// - `NotOpen` → 404 Not Found
impl IntoResponse for TicketError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Duplicate { .. } => StatusCode::CONFLICT,
            Self::NotOpen(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
