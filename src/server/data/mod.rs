//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed `DatabaseConnection`, use SeaORM entity models
//! internally and return domain models from `server::model`.

pub mod automod_settings;
pub mod command_log;
pub mod game_server_log;
pub mod mod_log;
pub mod ticket;
pub mod user_data;

#[cfg(test)]
mod test;
