//! Ticket factory for creating test ticket entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets with customizable fields.
///
/// Defaults to an open `general` ticket with `medium` priority in guild `1`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::ticket::TicketFactory;
///
/// let ticket = TicketFactory::new(&db, "100")
///     .category("bug")
///     .closed("staff")
///     .build()
///     .await?;
/// ```
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    ticket_id: String,
    user_id: String,
    username: String,
    guild_id: String,
    channel_id: String,
    category: String,
    priority: String,
    description: String,
    created_at: DateTime<Utc>,
    closed_by: Option<String>,
    transcript: Option<String>,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values for the given requester.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Discord ID of the requester
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            ticket_id: format!("ticket-user{}-{}", id, id),
            user_id: user_id.into(),
            username: format!("user{}", id),
            guild_id: "1".to_string(),
            channel_id: id.to_string(),
            category: "general".to_string(),
            priority: "medium".to_string(),
            description: "Test ticket description".to_string(),
            created_at: Utc::now(),
            closed_by: None,
            transcript: None,
        }
    }

    pub fn ticket_id(mut self, ticket_id: impl Into<String>) -> Self {
        self.ticket_id = ticket_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the ticket as already closed by `closed_by`.
    pub fn closed(mut self, closed_by: impl Into<String>) -> Self {
        self.closed_by = Some(closed_by.into());
        self
    }

    pub fn transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = Some(transcript.into());
        self
    }

    /// Builds and inserts the ticket entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tickets::Model)` - Created ticket entity
    /// - `Err(DbErr)` - Database error during insert (e.g. a second open ticket
    ///   for the same user violating the `open_user_id` unique constraint)
    pub async fn build(self) -> Result<entity::tickets::Model, DbErr> {
        let is_closed = self.closed_by.is_some();

        entity::tickets::ActiveModel {
            id: ActiveValue::NotSet,
            ticket_id: ActiveValue::Set(self.ticket_id),
            open_user_id: ActiveValue::Set((!is_closed).then(|| self.user_id.clone())),
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            status: ActiveValue::Set(if is_closed { "closed" } else { "open" }.to_string()),
            category: ActiveValue::Set(self.category),
            priority: ActiveValue::Set(self.priority),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(self.created_at),
            closed_at: ActiveValue::Set(is_closed.then(Utc::now)),
            closed_by: ActiveValue::Set(self.closed_by),
            close_reason: ActiveValue::Set(None),
            transcript: ActiveValue::Set(self.transcript),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket with default values for the specified requester.
///
/// Shorthand for `TicketFactory::new(db, user_id).build().await`.
pub async fn create_ticket(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::tickets::Model, DbErr> {
    TicketFactory::new(db, user_id).build().await
}
