//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod automod;
pub mod command_log;
pub mod game_server_log;
pub mod message;
pub mod mod_log;
pub mod ticket;
pub mod user_data;
