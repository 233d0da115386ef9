//! Domain models for the moderation activity log.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::mod_log::ModLogDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModLogAction {
    Kick,
    Ban,
    Unban,
    Timeout,
    Clear,
    AutomodDelete,
    TicketOpen,
    TicketClose,
}

impl ModLogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Unban => "unban",
            Self::Timeout => "timeout",
            Self::Clear => "clear",
            Self::AutomodDelete => "automod_delete",
            Self::TicketOpen => "ticket_open",
            Self::TicketClose => "ticket_close",
        }
    }
}

impl fmt::Display for ModLogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append-only record of a moderation action.
#[derive(Debug, Clone, PartialEq)]
pub struct ModLogEntry {
    pub id: i32,
    /// Kept as text so entries written by older versions still load.
    pub action_type: String,
    pub moderator_id: String,
    pub target_id: Option<String>,
    pub reason: Option<String>,
    pub duration: Option<String>,
    pub guild_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ModLogEntry {
    pub fn from_entity(entity: entity::mod_logs::Model) -> Self {
        Self {
            id: entity.id,
            action_type: entity.action_type,
            moderator_id: entity.moderator_id,
            target_id: entity.target_id,
            reason: entity.reason,
            duration: entity.duration,
            guild_id: entity.guild_id,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> ModLogDto {
        ModLogDto {
            id: self.id,
            action_type: self.action_type,
            moderator_id: self.moderator_id,
            target_id: self.target_id,
            reason: self.reason,
            duration: self.duration,
            guild_id: self.guild_id,
            timestamp: self.timestamp,
        }
    }
}

/// Actor recorded for operations performed through the HTTP admin API.
pub const ADMIN_API_ACTOR: &str = "admin-api";

#[derive(Debug, Clone)]
pub struct CreateModLogParams {
    pub action: ModLogAction,
    /// Discord ID of the acting user, or [`ADMIN_API_ACTOR`] for admin API calls.
    pub moderator_id: String,
    pub target_id: Option<u64>,
    pub reason: Option<String>,
    /// Human readable duration, e.g. `10 minutes`.
    pub duration: Option<String>,
    pub guild_id: u64,
}
