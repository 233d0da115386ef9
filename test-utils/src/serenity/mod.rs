//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's gateway would deliver. Use them when testing conversions from
//! Serenity types into the bot's own event types.
//!
//! ```rust,ignore
//! use test_utils::serenity::message::create_test_message;
//!
//! let message = create_test_message(1, 2, Some(3), 4, "alice", "hello");
//! ```

pub mod message;

pub use message::{create_test_message, create_test_message_with_mentions};
