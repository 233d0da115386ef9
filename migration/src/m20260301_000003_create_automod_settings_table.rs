use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AutomodSettings::Table)
                    .if_not_exists()
                    .col(string(AutomodSettings::GuildId).primary_key())
                    .col(boolean(AutomodSettings::SpamDetection).default(true))
                    .col(boolean(AutomodSettings::ProfanityFilter).default(true))
                    .col(boolean(AutomodSettings::LinkFilter).default(false))
                    .col(integer(AutomodSettings::MaxMentions).default(5))
                    .col(integer(AutomodSettings::MaxMessages).default(10))
                    .col(integer(AutomodSettings::TimeWindow).default(10))
                    .col(
                        timestamp(AutomodSettings::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AutomodSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AutomodSettings {
    Table,
    GuildId,
    SpamDetection,
    ProfanityFilter,
    LinkFilter,
    MaxMentions,
    MaxMessages,
    TimeWindow,
    UpdatedAt,
}
