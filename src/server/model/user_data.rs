use crate::model::user_data::{DeletedUserDataDto, UserDataExportDto};

use super::{
    command_log::CommandLogEntry, game_server_log::GameServerLog, mod_log::ModLogEntry,
    ticket::Ticket,
};

/// Everything stored about one Discord user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDataExport {
    pub tickets: Vec<Ticket>,
    /// Moderation entries targeting the user.
    pub moderation: Vec<ModLogEntry>,
    pub game_server: Vec<GameServerLog>,
    /// Slash commands the user invoked.
    pub commands: Vec<CommandLogEntry>,
}

impl UserDataExport {
    pub fn into_dto(self) -> UserDataExportDto {
        UserDataExportDto {
            tickets: self.tickets.into_iter().map(Ticket::into_dto).collect(),
            moderation: self
                .moderation
                .into_iter()
                .map(ModLogEntry::into_dto)
                .collect(),
            game_server: self
                .game_server
                .into_iter()
                .map(GameServerLog::into_dto)
                .collect(),
            commands: self
                .commands
                .into_iter()
                .map(CommandLogEntry::into_dto)
                .collect(),
        }
    }
}

/// Row counts removed by a user data deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeletedUserData {
    pub tickets: u64,
    pub moderation: u64,
    pub game_server: u64,
    pub commands: u64,
}

impl DeletedUserData {
    pub fn into_dto(self) -> DeletedUserDataDto {
        DeletedUserDataDto {
            tickets: self.tickets,
            moderation: self.moderation,
            game_server: self.game_server,
            commands: self.commands,
        }
    }
}
