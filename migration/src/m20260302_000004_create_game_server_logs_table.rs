use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameServerLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(GameServerLogs::Id))
                    .col(string(GameServerLogs::EventType))
                    .col(string(GameServerLogs::PlayerName))
                    .col(string_null(GameServerLogs::PlayerId))
                    .col(string_null(GameServerLogs::TargetName))
                    .col(string_null(GameServerLogs::TargetId))
                    .col(string_null(GameServerLogs::Weapon))
                    .col(integer_null(GameServerLogs::MoneyAmount))
                    .col(double_null(GameServerLogs::Distance))
                    .col(string_null(GameServerLogs::ServerName))
                    .col(text_null(GameServerLogs::AdditionalData))
                    .col(
                        timestamp(GameServerLogs::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_server_logs_player_id")
                    .table(GameServerLogs::Table)
                    .col(GameServerLogs::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_game_server_logs_player_id")
                    .table(GameServerLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameServerLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GameServerLogs {
    Table,
    Id,
    EventType,
    PlayerName,
    PlayerId,
    TargetName,
    TargetId,
    Weapon,
    MoneyAmount,
    Distance,
    ServerName,
    AdditionalData,
    Timestamp,
}
