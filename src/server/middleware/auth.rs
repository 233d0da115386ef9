use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::error::{auth::AuthError, AppError};

/// Guards the `/api/admin/*` routes with the static admin bearer token.
pub struct AdminGuard<'a> {
    admin_token: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AdminGuard<'a> {
    pub fn new(admin_token: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            admin_token,
            headers,
        }
    }

    /// Requires `Authorization: Bearer <ADMIN_API_TOKEN>`.
    ///
    /// # Returns
    /// - `Ok(())` - Token matches
    /// - `Err(AuthError::MissingToken)` - No bearer authorization header
    /// - `Err(AuthError::InvalidToken)` - Token does not match
    pub fn require(&self) -> Result<(), AppError> {
        let Some(token) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
        else {
            return Err(AuthError::MissingToken.into());
        };

        // An empty configured token would otherwise accept "Bearer ".
        if self.admin_token.is_empty() || token != self.admin_token {
            return Err(AuthError::InvalidToken("admin API").into());
        }

        Ok(())
    }
}
