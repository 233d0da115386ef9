use crate::server::{
    data::ticket::TicketRepository,
    model::ticket::{CloseTicketRecord, CreateTicketParams, TicketPriority, TicketStatus},
};
use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::ticket::TicketFactory};

mod close;
mod create;
mod find;
mod recent;

fn create_params(user_id: u64, channel_id: u64) -> CreateTicketParams {
    CreateTicketParams {
        ticket_id: format!("ticket-user-{}", channel_id),
        user_id,
        username: "user".to_string(),
        guild_id: 1,
        channel_id,
        category: "general".to_string(),
        priority: TicketPriority::Medium,
        description: "Cannot join the server".to_string(),
        created_at: Utc::now(),
    }
}

fn close_record(closed_by: &str) -> CloseTicketRecord {
    CloseTicketRecord {
        closed_at: Utc::now(),
        closed_by: closed_by.to_string(),
        close_reason: Some("Resolved".to_string()),
        transcript: "[2026-01-01T12:00:00Z] alice: hello".to_string(),
    }
}
