//! Domain models for the slash command audit log.

use chrono::{DateTime, Utc};

use crate::model::command_log::CommandLogDto;

/// One recorded slash command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLogEntry {
    pub id: i32,
    pub command_name: String,
    pub user_id: String,
    pub username: String,
    pub channel_id: String,
    pub channel_name: Option<String>,
    pub guild_id: Option<String>,
    /// Options as `name: value` pairs joined by `, `.
    pub arguments: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl CommandLogEntry {
    pub fn from_entity(entity: entity::command_logs::Model) -> Self {
        Self {
            id: entity.id,
            command_name: entity.command_name,
            user_id: entity.user_id,
            username: entity.username,
            channel_id: entity.channel_id,
            channel_name: entity.channel_name,
            guild_id: entity.guild_id,
            arguments: entity.arguments,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> CommandLogDto {
        CommandLogDto {
            id: self.id,
            command_name: self.command_name,
            user_id: self.user_id,
            username: self.username,
            channel_id: self.channel_id,
            channel_name: self.channel_name,
            guild_id: self.guild_id,
            arguments: self.arguments,
            timestamp: self.timestamp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommandLogParams {
    pub command_name: String,
    pub user_id: u64,
    pub username: String,
    pub channel_id: u64,
    pub channel_name: Option<String>,
    pub guild_id: Option<u64>,
    /// Empty strings are stored as no arguments.
    pub arguments: String,
}
