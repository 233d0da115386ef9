use serde::{Deserialize, Serialize};

use super::{
    command_log::CommandLogDto, game_server::GameServerLogDto, mod_log::ModLogDto,
    ticket::TicketDto,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UserDataExportDto {
    pub tickets: Vec<TicketDto>,
    pub moderation: Vec<ModLogDto>,
    pub game_server: Vec<GameServerLogDto>,
    pub commands: Vec<CommandLogDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct DeletedUserDataDto {
    pub tickets: u64,
    pub moderation: u64,
    pub game_server: u64,
    pub commands: u64,
}
