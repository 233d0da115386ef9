use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request to an admin route carried no bearer token.
    #[error("Missing admin bearer token")]
    MissingToken,

    /// Bearer token or shared secret did not match the configured value.
    #[error("Invalid token for {0}")]
    InvalidToken(&'static str),
}

/// Converts authentication errors into 401 responses.
///
/// The message returned to the client is identical for every variant so the
/// response does not reveal whether a token was missing or wrong.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
