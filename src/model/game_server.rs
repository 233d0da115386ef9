use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct GameServerLogDto {
    pub id: i32,
    pub event_type: String,
    pub player_name: String,
    pub player_id: Option<String>,
    pub target_name: Option<String>,
    pub target_id: Option<String>,
    pub weapon: Option<String>,
    pub money_amount: Option<i32>,
    pub distance: Option<f64>,
    pub server_name: Option<String>,
    pub additional_data: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

/// Body posted by the game server log forwarder.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct IngestGameServerLogDto {
    pub auth_token: String,
    pub event_type: String,
    pub player_name: String,
    pub player_id: Option<String>,
    pub target_name: Option<String>,
    pub target_id: Option<String>,
    pub weapon: Option<String>,
    pub money_amount: Option<i32>,
    pub distance: Option<f64>,
    pub server_name: Option<String>,
    pub additional_data: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct IngestedLogDto {
    pub id: i32,
}
