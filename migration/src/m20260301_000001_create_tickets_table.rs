use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(pk_auto(Tickets::Id))
                    .col(string_uniq(Tickets::TicketId))
                    .col(string(Tickets::UserId))
                    .col(string(Tickets::Username))
                    .col(string(Tickets::GuildId))
                    .col(string_uniq(Tickets::ChannelId))
                    // Mirrors user_id while the ticket is open and is cleared on close,
                    // so the unique constraint allows one open ticket per user.
                    .col(string_null(Tickets::OpenUserId).unique_key())
                    .col(string(Tickets::Status).default("open"))
                    .col(string(Tickets::Category))
                    .col(string(Tickets::Priority).default("medium"))
                    .col(text(Tickets::Description))
                    .col(
                        timestamp(Tickets::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Tickets::ClosedAt))
                    .col(string_null(Tickets::ClosedBy))
                    .col(text_null(Tickets::CloseReason))
                    .col(text_null(Tickets::Transcript))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_user_id")
                    .table(Tickets::Table)
                    .col(Tickets::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_status")
                    .table(Tickets::Table)
                    .col(Tickets::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tickets_status")
                    .table(Tickets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_tickets_user_id")
                    .table(Tickets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    TicketId,
    UserId,
    Username,
    GuildId,
    ChannelId,
    OpenUserId,
    Status,
    Category,
    Priority,
    Description,
    CreatedAt,
    ClosedAt,
    ClosedBy,
    CloseReason,
    Transcript,
}
