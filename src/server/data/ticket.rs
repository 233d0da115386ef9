//! Ticket repository for database operations.
//!
//! Besides plain CRUD this repository carries the two store-level guards of the
//! ticket lifecycle: the `open_user_id` unique column, which rejects a second open
//! ticket for the same requester, and the conditional close update, which only
//! succeeds for a ticket that is still open.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::ticket::{
    CloseTicketRecord, CreateTicketParams, Ticket, TicketStatus,
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    /// Creates a new TicketRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TicketRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new open ticket.
    ///
    /// # Arguments
    /// - `params` - Ticket fields including the already created channel id
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket
    /// - `Err(DbErr)` - Database error; a unique constraint violation means the
    ///   requester already has an open ticket or the ticket/channel id is taken
    pub async fn create(&self, params: CreateTicketParams) -> Result<Ticket, DbErr> {
        let user_id = params.user_id.to_string();

        let entity = entity::tickets::ActiveModel {
            ticket_id: ActiveValue::Set(params.ticket_id),
            user_id: ActiveValue::Set(user_id.clone()),
            username: ActiveValue::Set(params.username),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            channel_id: ActiveValue::Set(params.channel_id.to_string()),
            open_user_id: ActiveValue::Set(Some(user_id)),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            category: ActiveValue::Set(params.category),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(params.created_at),
            closed_at: ActiveValue::Set(None),
            closed_by: ActiveValue::Set(None),
            close_reason: ActiveValue::Set(None),
            transcript: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ticket::from_entity(entity))
    }

    /// Finds the open ticket of a requester, if any.
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))` - The requester's open ticket
    /// - `Ok(None)` - The requester has no open ticket
    /// - `Err(DbErr)` - Database error
    pub async fn find_open_by_user(&self, user_id: u64) -> Result<Option<Ticket>, DbErr> {
        let entity = entity::prelude::Tickets::find()
            .filter(entity::tickets::Column::UserId.eq(user_id.to_string()))
            .filter(entity::tickets::Column::Status.eq(TicketStatus::Open.as_str()))
            .one(self.db)
            .await?;

        Ok(entity.map(Ticket::from_entity))
    }

    pub async fn find_by_ticket_id(&self, ticket_id: &str) -> Result<Option<Ticket>, DbErr> {
        let entity = entity::prelude::Tickets::find()
            .filter(entity::tickets::Column::TicketId.eq(ticket_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Ticket::from_entity))
    }

    pub async fn find_by_channel_id(&self, channel_id: u64) -> Result<Option<Ticket>, DbErr> {
        let entity = entity::prelude::Tickets::find()
            .filter(entity::tickets::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        Ok(entity.map(Ticket::from_entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, DbErr> {
        let entity = entity::prelude::Tickets::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Ticket::from_entity))
    }

    /// Closes a ticket if, and only if, it is still open.
    ///
    /// Runs a single `UPDATE ... WHERE id = ? AND status = 'open'` so that of several
    /// concurrent closers exactly one observes an affected row. Clearing
    /// `open_user_id` frees the requester to open a new ticket.
    ///
    /// # Arguments
    /// - `id` - Row id of the ticket
    /// - `record` - Close metadata and captured transcript
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))` - The ticket after closing
    /// - `Ok(None)` - The ticket does not exist or was already closed; nothing changed
    /// - `Err(DbErr)` - Database error
    pub async fn close(&self, id: i32, record: CloseTicketRecord) -> Result<Option<Ticket>, DbErr> {
        let result = entity::prelude::Tickets::update_many()
            .set(entity::tickets::ActiveModel {
                status: ActiveValue::Set(TicketStatus::Closed.as_str().to_string()),
                open_user_id: ActiveValue::Set(None),
                closed_at: ActiveValue::Set(Some(record.closed_at)),
                closed_by: ActiveValue::Set(Some(record.closed_by)),
                close_reason: ActiveValue::Set(record.close_reason),
                transcript: ActiveValue::Set(Some(record.transcript)),
                ..Default::default()
            })
            .filter(entity::tickets::Column::Id.eq(id))
            .filter(entity::tickets::Column::Status.eq(TicketStatus::Open.as_str()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Gets the most recently created tickets, newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of tickets to return
    pub async fn recent(&self, limit: u64) -> Result<Vec<Ticket>, DbErr> {
        let entities = entity::prelude::Tickets::find()
            .order_by_desc(entity::tickets::Column::CreatedAt)
            .order_by_desc(entity::tickets::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }
}
