use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CommandLogDto {
    pub id: i32,
    pub command_name: String,
    pub user_id: String,
    pub username: String,
    pub channel_id: String,
    pub channel_name: Option<String>,
    pub guild_id: Option<String>,
    pub arguments: Option<String>,
    pub timestamp: DateTime<Utc>,
}
