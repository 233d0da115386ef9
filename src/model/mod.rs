//! Data transfer objects exchanged over the HTTP admin API.

pub mod api;
pub mod automod;
pub mod command_log;
pub mod game_server;
pub mod mod_log;
pub mod ticket;
pub mod user_data;
