//! Support ticket lifecycle.
//!
//! A ticket moves from OPEN to CLOSED exactly once. Opening allocates a private
//! Discord channel and persists the ticket; closing captures a transcript, marks the
//! ticket closed and schedules the channel for deletion.
//!
//! The service is organized into separate modules by concern:
//! - `open` - Duplicate check, channel allocation and persistence
//! - `close` - Transcript capture, conditional close and delayed channel deletion
//! - `transcript` - Transcript rendering
//! - `naming` - Ticket id derivation
//! - `notice` - Embeds posted into ticket channels
//! - `assist` - Optional AI acknowledgement replies

pub mod assist;
pub mod close;
pub mod naming;
pub mod notice;
pub mod open;
pub mod transcript;

#[cfg(test)]
mod test;

use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::ticket::TicketRepository,
    error::AppError,
    gateway::ChannelGateway,
    model::ticket::Ticket,
    util::keyed_lock::KeyedLocks,
};

use self::assist::TicketAssistant;

/// Maximum number of tickets returned by listing queries.
pub const RECENT_TICKET_LIMIT: u64 = 100;

/// Tunables of the ticket lifecycle.
#[derive(Debug, Clone)]
pub struct TicketSettings {
    /// Name of the category created when none matches `category_match`.
    pub category_name: String,
    /// Case-insensitive fragment identifying an existing support category.
    pub category_match: String,
    /// Roles granted access to every ticket channel.
    pub staff_role_ids: Vec<u64>,
    /// Grace period between closing a ticket and deleting its channel.
    pub close_delay: Duration,
    /// Delay before the AI acknowledgement is posted.
    pub assist_delay: Duration,
    /// Number of messages captured into the transcript.
    pub transcript_limit: u8,
}

impl Default for TicketSettings {
    fn default() -> Self {
        Self {
            category_name: "🎫 Support Tickets".to_string(),
            category_match: "support".to_string(),
            staff_role_ids: Vec::new(),
            close_delay: Duration::from_secs(10),
            assist_delay: Duration::from_secs(3),
            transcript_limit: 100,
        }
    }
}

impl TicketSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            staff_role_ids: config.staff_role_ids.clone(),
            close_delay: config.ticket_close_delay,
            assist_delay: config.ticket_assist_delay,
            ..Self::default()
        }
    }
}

/// Process-wide collaborators shared by every `TicketService`.
///
/// Cheap to clone; the bot handler and the HTTP state hold the same desk so that the
/// per-requester and per-ticket locks are shared between both entry points.
#[derive(Clone)]
pub struct TicketDesk {
    gateway: Arc<dyn ChannelGateway>,
    locks: KeyedLocks,
    settings: Arc<TicketSettings>,
    assistant: Option<Arc<dyn TicketAssistant>>,
}

impl TicketDesk {
    pub fn new(gateway: Arc<dyn ChannelGateway>, settings: TicketSettings) -> Self {
        Self {
            gateway,
            locks: KeyedLocks::new(),
            settings: Arc::new(settings),
            assistant: None,
        }
    }

    pub fn with_assistant(mut self, assistant: Arc<dyn TicketAssistant>) -> Self {
        self.assistant = Some(assistant);
        self
    }

    pub fn gateway(&self) -> &Arc<dyn ChannelGateway> {
        &self.gateway
    }
}

/// Service providing the ticket lifecycle operations.
pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
    desk: &'a TicketDesk,
}

impl<'a> TicketService<'a> {
    /// Creates a new TicketService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `desk` - Shared gateway, locks and settings
    ///
    /// # Returns
    /// - `TicketService` - New service instance
    pub fn new(db: &'a DatabaseConnection, desk: &'a TicketDesk) -> Self {
        Self { db, desk }
    }

    /// Gets the most recently created tickets, newest first.
    pub async fn recent(&self) -> Result<Vec<Ticket>, AppError> {
        let repo = TicketRepository::new(self.db);

        Ok(repo.recent(RECENT_TICKET_LIMIT).await?)
    }

    /// Gets the stored transcript of a ticket.
    ///
    /// # Returns
    /// - `Ok(String)` - The transcript; empty if none was captured (e.g. still open)
    /// - `Err(AppError::NotFound)` - No ticket with this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn transcript(&self, ticket_id: &str) -> Result<String, AppError> {
        let repo = TicketRepository::new(self.db);
        let ticket = repo
            .find_by_ticket_id(ticket_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", ticket_id)))?;

        Ok(ticket.transcript.unwrap_or_default())
    }
}
