//! Per-user data export and erasure across all tables.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::{
    data::{
        command_log::CommandLogRepository, game_server_log::GameServerLogRepository,
        mod_log::ModLogRepository,
    },
    model::{
        ticket::Ticket,
        user_data::{DeletedUserData, UserDataExport},
    },
};

pub struct UserDataRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserDataRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects every ticket, moderation entry, game-server event and command
    /// invocation of a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(UserDataExport)` - All stored data, possibly empty
    /// - `Err(DbErr)` - Database error
    pub async fn export(&self, user_id: u64) -> Result<UserDataExport, DbErr> {
        let tickets = entity::prelude::Tickets::find()
            .filter(entity::tickets::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::tickets::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect();

        let moderation = ModLogRepository::new(self.db)
            .find_by_target(user_id)
            .await?;
        let game_server = GameServerLogRepository::new(self.db)
            .find_by_player(&user_id.to_string())
            .await?;
        let commands = CommandLogRepository::new(self.db)
            .find_by_user(user_id)
            .await?;

        Ok(UserDataExport {
            tickets,
            moderation,
            game_server,
            commands,
        })
    }

    /// Deletes all data of a user in one transaction.
    ///
    /// If any of the deletes fails the transaction is dropped without commit and
    /// every table is left untouched.
    ///
    /// # Returns
    /// - `Ok(DeletedUserData)` - Number of rows removed per table
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, user_id: u64) -> Result<DeletedUserData, DbErr> {
        let user_id = user_id.to_string();
        let txn = self.db.begin().await?;

        let tickets = entity::prelude::Tickets::delete_many()
            .filter(entity::tickets::Column::UserId.eq(user_id.as_str()))
            .exec(&txn)
            .await?;
        let moderation = entity::prelude::ModLogs::delete_many()
            .filter(entity::mod_logs::Column::TargetId.eq(user_id.as_str()))
            .exec(&txn)
            .await?;
        let game_server = entity::prelude::GameServerLogs::delete_many()
            .filter(entity::game_server_logs::Column::PlayerId.eq(user_id.as_str()))
            .exec(&txn)
            .await?;
        let commands = entity::prelude::CommandLogs::delete_many()
            .filter(entity::command_logs::Column::UserId.eq(user_id.as_str()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(DeletedUserData {
            tickets: tickets.rows_affected,
            moderation: moderation.rows_affected,
            game_server: game_server.rows_affected,
            commands: commands.rows_affected,
        })
    }
}
