use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::api::deserialize_u64_from_string;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TicketDto {
    pub ticket_id: String,
    pub user_id: String,
    pub username: String,
    pub guild_id: String,
    pub channel_id: String,
    pub status: String,
    pub category: String,
    pub priority: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<String>,
    pub close_reason: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateTicketDto {
    #[serde(deserialize_with = "deserialize_u64_from_string")]
    pub user_id: u64,
    pub category: String,
    pub description: String,
    pub priority: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct CloseTicketDto {
    pub reason: Option<String>,
    /// Name recorded as the closer; defaults to the admin panel.
    pub closed_by: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TranscriptDto {
    pub ticket_id: String,
    pub transcript: String,
}
