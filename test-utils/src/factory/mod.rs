//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let ticket = factory::create_ticket(&db, "100").await?;
//! let closed = factory::ticket::TicketFactory::new(&db, "100").closed("staff").build().await?;
//! ```
//!
//! # Available Factories
//!
//! - `ticket` - Create support ticket entities
//! - `mod_log` - Create moderation log entries
//! - `command_log` - Create slash command audit rows
//! - `automod_settings` - Create per-guild automod settings
//! - `game_server_log` - Create game server log rows
//! - `helpers` - Unique ID generation

pub mod automod_settings;
pub mod command_log;
pub mod game_server_log;
pub mod helpers;
pub mod mod_log;
pub mod ticket;

pub use automod_settings::create_automod_settings;
pub use command_log::create_command_log;
pub use game_server_log::create_game_server_log;
pub use mod_log::create_mod_log;
pub use ticket::create_ticket;
