use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(ModLogs::Id))
                    .col(string(ModLogs::ActionType))
                    .col(string(ModLogs::ModeratorId))
                    .col(string_null(ModLogs::TargetId))
                    .col(text_null(ModLogs::Reason))
                    .col(string_null(ModLogs::Duration))
                    .col(string(ModLogs::GuildId))
                    .col(
                        timestamp(ModLogs::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mod_logs_target_id")
                    .table(ModLogs::Table)
                    .col(ModLogs::TargetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_mod_logs_target_id")
                    .table(ModLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ModLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ModLogs {
    Table,
    Id,
    ActionType,
    ModeratorId,
    TargetId,
    Reason,
    Duration,
    GuildId,
    Timestamp,
}
