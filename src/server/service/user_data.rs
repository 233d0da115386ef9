use sea_orm::DatabaseConnection;

use crate::server::{
    data::user_data::UserDataRepository,
    error::AppError,
    model::user_data::{DeletedUserData, UserDataExport},
};

/// Export and erasure of everything stored about one Discord user.
pub struct UserDataService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserDataService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn export(&self, user_id: u64) -> Result<UserDataExport, AppError> {
        Ok(UserDataRepository::new(self.db).export(user_id).await?)
    }

    /// Deletes the user's tickets, moderation entries targeting them, their
    /// game-server events and their command invocations. Either every table is
    /// cleared or none is.
    ///
    /// # Returns
    /// - `Ok(DeletedUserData)` - Row counts per table
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, user_id: u64) -> Result<DeletedUserData, AppError> {
        let deleted = UserDataRepository::new(self.db).delete(user_id).await?;

        tracing::info!(
            "Deleted data of user {}: {} tickets, {} moderation entries, {} game server events, {} commands",
            user_id,
            deleted.tickets,
            deleted.moderation,
            deleted.game_server,
            deleted.commands
        );

        Ok(deleted)
    }
}
