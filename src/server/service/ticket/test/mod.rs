use std::{sync::Arc, time::Duration};

use chrono::{DateTime, TimeZone, Utc};
use entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serenity::async_trait;
use test_utils::{builder::TestBuilder, factory::ticket::TicketFactory};

use crate::server::{
    error::{ticket::TicketError, AppError},
    gateway::{fake::FakeGateway, ChannelMessage},
    model::ticket::{
        CloseTicketParams, OpenTicketParams, Ticket, TicketPriority, TicketReference, TicketStatus,
    },
    service::ticket::{assist::TicketAssistant, TicketDesk, TicketService, TicketSettings},
};

mod concurrency;

const GUILD_ID: u64 = 1;
const STAFF_ROLE_ID: u64 = 77;

/// Desk with zero delays so spawned follow-ups run right away.
fn desk(gateway: &Arc<FakeGateway>) -> TicketDesk {
    TicketDesk::new(
        gateway.clone(),
        TicketSettings {
            staff_role_ids: vec![STAFF_ROLE_ID],
            close_delay: Duration::ZERO,
            assist_delay: Duration::ZERO,
            ..TicketSettings::default()
        },
    )
}

fn open_params(user_id: u64, username: &str) -> OpenTicketParams {
    OpenTicketParams {
        guild_id: GUILD_ID,
        user_id,
        username: username.to_string(),
        category: "bug".to_string(),
        description: "The launcher crashes on start".to_string(),
        priority: TicketPriority::High,
    }
}

fn close_params(reference: TicketReference) -> CloseTicketParams {
    CloseTicketParams {
        reference,
        closed_by: "staffer".to_string(),
        closed_by_id: Some(500),
        reason: Some("Fixed in latest build".to_string()),
    }
}

fn history_message(id: u64, channel_id: u64, secs: i64, author: &str, content: &str) -> ChannelMessage {
    ChannelMessage {
        id,
        channel_id,
        author_id: id,
        author_name: author.to_string(),
        content: content.to_string(),
        timestamp: at(secs),
        is_bot: false,
    }
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_767_268_800 + secs, 0).unwrap()
}

/// Lets detached follow-up tasks run.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

fn channel_of(ticket: &Ticket) -> u64 {
    ticket.channel_id.parse().unwrap()
}
