//! Domain models for game-server event logs.

use chrono::{DateTime, Utc};

use crate::model::game_server::{GameServerLogDto, IngestGameServerLogDto};

#[derive(Debug, Clone, PartialEq)]
pub struct GameServerLog {
    pub id: i32,
    /// `connect`, `disconnect`, `kill`, `money` or `other`.
    pub event_type: String,
    pub player_name: String,
    pub player_id: Option<String>,
    pub target_name: Option<String>,
    pub target_id: Option<String>,
    pub weapon: Option<String>,
    pub money_amount: Option<i32>,
    pub distance: Option<f64>,
    pub server_name: Option<String>,
    /// Raw JSON text as forwarded by the server.
    pub additional_data: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl GameServerLog {
    pub fn from_entity(entity: entity::game_server_logs::Model) -> Self {
        Self {
            id: entity.id,
            event_type: entity.event_type,
            player_name: entity.player_name,
            player_id: entity.player_id,
            target_name: entity.target_name,
            target_id: entity.target_id,
            weapon: entity.weapon,
            money_amount: entity.money_amount,
            distance: entity.distance,
            server_name: entity.server_name,
            additional_data: entity.additional_data,
            timestamp: entity.timestamp,
        }
    }

    /// Stored extra data that is not valid JSON is returned as a JSON string.
    pub fn into_dto(self) -> GameServerLogDto {
        let additional_data = self.additional_data.map(|raw| {
            serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw))
        });

        GameServerLogDto {
            id: self.id,
            event_type: self.event_type,
            player_name: self.player_name,
            player_id: self.player_id,
            target_name: self.target_name,
            target_id: self.target_id,
            weapon: self.weapon,
            money_amount: self.money_amount,
            distance: self.distance,
            server_name: self.server_name,
            additional_data,
            timestamp: self.timestamp,
        }
    }
}

const EVENT_TYPES: [&str; 5] = ["connect", "disconnect", "kill", "money", "other"];

#[derive(Debug, Clone)]
pub struct CreateGameServerLogParams {
    pub event_type: String,
    pub player_name: String,
    pub player_id: Option<String>,
    pub target_name: Option<String>,
    pub target_id: Option<String>,
    pub weapon: Option<String>,
    pub money_amount: Option<i32>,
    pub distance: Option<f64>,
    pub server_name: Option<String>,
    pub additional_data: Option<String>,
}

impl CreateGameServerLogParams {
    /// Converts an ingestion body; unknown event types are recorded as `other`.
    pub fn from_dto(dto: IngestGameServerLogDto) -> Self {
        let event_type = dto.event_type.to_lowercase();
        let event_type = if EVENT_TYPES.contains(&event_type.as_str()) {
            event_type
        } else {
            "other".to_string()
        };

        Self {
            event_type,
            player_name: dto.player_name,
            player_id: dto.player_id,
            target_name: dto.target_name,
            target_id: dto.target_id,
            weapon: dto.weapon,
            money_amount: dto.money_amount,
            distance: dto.distance,
            server_name: dto.server_name,
            additional_data: dto.additional_data.map(|value| value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingest(event_type: &str) -> IngestGameServerLogDto {
        IngestGameServerLogDto {
            auth_token: "secret".to_string(),
            event_type: event_type.to_string(),
            player_name: "Miller".to_string(),
            player_id: Some("76561198000000000".to_string()),
            target_name: None,
            target_id: None,
            weapon: None,
            money_amount: None,
            distance: None,
            server_name: None,
            additional_data: Some(serde_json::json!({ "side": "west" })),
        }
    }

    #[test]
    fn keeps_known_event_types() {
        assert_eq!(CreateGameServerLogParams::from_dto(ingest("KILL")).event_type, "kill");
    }

    #[test]
    fn maps_unknown_event_types_to_other() {
        assert_eq!(CreateGameServerLogParams::from_dto(ingest("respawn")).event_type, "other");
    }

    #[test]
    fn serializes_additional_data_as_json_text() {
        let params = CreateGameServerLogParams::from_dto(ingest("connect"));
        assert_eq!(params.additional_data.as_deref(), Some(r#"{"side":"west"}"#));
    }
}
