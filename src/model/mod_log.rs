use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ModLogDto {
    pub id: i32,
    pub action_type: String,
    pub moderator_id: String,
    pub target_id: Option<String>,
    pub reason: Option<String>,
    pub duration: Option<String>,
    pub guild_id: String,
    pub timestamp: DateTime<Utc>,
}
