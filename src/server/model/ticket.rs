//! Domain models for the support ticket lifecycle.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::model::ticket::TicketDto;

/// Lifecycle state of a ticket. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Anything other than `open` is treated as closed so a stray value can never
    /// reopen a ticket.
    pub fn from_db(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            _ => Self::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!(
                "Unknown priority '{}', expected low, medium or high",
                other
            )),
        }
    }
}

/// A support request bound to a dedicated private channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    /// Row id.
    pub id: i32,
    /// Public identifier, `ticket-<name>-<millis>`.
    pub ticket_id: String,
    /// Discord ID of the requester (stored as String).
    pub user_id: String,
    pub username: String,
    pub guild_id: String,
    pub channel_id: String,
    pub status: TicketStatus,
    pub category: String,
    /// Stored as free text; unknown values are kept as-is.
    pub priority: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<String>,
    pub close_reason: Option<String>,
    pub transcript: Option<String>,
}

impl Ticket {
    /// Converts an entity model to a ticket domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ticket` - The converted ticket domain model
    pub fn from_entity(entity: entity::tickets::Model) -> Self {
        Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            user_id: entity.user_id,
            username: entity.username,
            guild_id: entity.guild_id,
            channel_id: entity.channel_id,
            status: TicketStatus::from_db(&entity.status),
            category: entity.category,
            priority: entity.priority,
            description: entity.description,
            created_at: entity.created_at,
            closed_at: entity.closed_at,
            closed_by: entity.closed_by,
            close_reason: entity.close_reason,
            transcript: entity.transcript,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == TicketStatus::Open
    }

    /// Converts the ticket into its API representation. The transcript is served by
    /// its own endpoint and is not included.
    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            ticket_id: self.ticket_id,
            user_id: self.user_id,
            username: self.username,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            status: self.status.as_str().to_string(),
            category: self.category,
            priority: self.priority,
            description: self.description,
            created_at: self.created_at,
            closed_at: self.closed_at,
            closed_by: self.closed_by,
            close_reason: self.close_reason,
        }
    }
}

/// Input to the open operation, from either the slash command or the admin API.
#[derive(Debug, Clone)]
pub struct OpenTicketParams {
    pub guild_id: u64,
    pub user_id: u64,
    pub username: String,
    pub category: String,
    pub description: String,
    pub priority: TicketPriority,
}

/// Row written by the repository once the ticket channel exists.
#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub ticket_id: String,
    pub user_id: u64,
    pub username: String,
    pub guild_id: u64,
    pub channel_id: u64,
    pub category: String,
    pub priority: TicketPriority,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// How a close request identifies its ticket.
#[derive(Debug, Clone, PartialEq)]
pub enum TicketReference {
    /// Public ticket id, used by the admin API.
    TicketId(String),
    /// Channel the `/close` command was issued in.
    Channel(u64),
}

impl fmt::Display for TicketReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TicketId(id) => f.write_str(id),
            Self::Channel(id) => write!(f, "channel {}", id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CloseTicketParams {
    pub reference: TicketReference,
    /// Display name of whoever closed the ticket.
    pub closed_by: String,
    /// Discord ID of the closer when known; recorded as the moderator in the log.
    pub closed_by_id: Option<u64>,
    pub reason: Option<String>,
}

/// Fields written by the conditional close update.
#[derive(Debug, Clone)]
pub struct CloseTicketRecord {
    pub closed_at: DateTime<Utc>,
    pub closed_by: String,
    pub close_reason: Option<String>,
    pub transcript: String,
}
