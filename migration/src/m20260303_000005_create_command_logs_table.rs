use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommandLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(CommandLogs::Id))
                    .col(string(CommandLogs::CommandName))
                    .col(string(CommandLogs::UserId))
                    .col(string(CommandLogs::Username))
                    .col(string(CommandLogs::ChannelId))
                    .col(string_null(CommandLogs::ChannelName))
                    .col(string_null(CommandLogs::GuildId))
                    .col(text_null(CommandLogs::Arguments))
                    .col(
                        timestamp(CommandLogs::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_command_logs_user_id")
                    .table(CommandLogs::Table)
                    .col(CommandLogs::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_command_logs_user_id")
                    .table(CommandLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CommandLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CommandLogs {
    Table,
    Id,
    CommandName,
    UserId,
    Username,
    ChannelId,
    ChannelName,
    GuildId,
    Arguments,
    Timestamp,
}
