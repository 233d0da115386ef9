//! Discord bot integration for tickets, moderation commands and AutoMod.
//!
//! The bot is initialized during server startup and runs in a separate tokio task
//! so it does not block the HTTP server. It shares the `TicketDesk` with the admin
//! API, so both entry points serialize ticket operations through the same locks.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and slash command interactions
//! - `GUILD_MESSAGES` - Receive messages inspected by AutoMod
//! - `MESSAGE_CONTENT` - Read message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
