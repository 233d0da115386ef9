//! Service layer for business logic and orchestration.
//!
//! Services sit between the entry points (HTTP controllers and bot handlers) and the
//! data (repository) layer. They are responsible for:
//!
//! - **Business Logic**: Ticket lifecycle rules and AutoMod verdicts
//! - **Orchestration**: Coordinating repository calls with Discord side effects
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Controllers and bot handlers both construct the same services, so a ticket
//! opened through `/ticket` and one opened through the admin API follow one path.

pub mod automod;
pub mod command_log;
pub mod game_server_log;
pub mod moderation_log;
pub mod release;
pub mod ticket;
pub mod user_data;
