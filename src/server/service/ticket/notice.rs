//! Messages posted into ticket channels.

use chrono::Utc;

use crate::server::{
    gateway::{EmbedSpec, OutboundMessage},
    model::ticket::Ticket,
};

const OPEN_COLOR: u32 = 0x0099FF;
const CLOSE_COLOR: u32 = 0xFF0000;

/// Introduction posted when a ticket channel is created; pings the requester.
pub fn introduction(ticket: &Ticket) -> OutboundMessage {
    let embed = EmbedSpec::new(format!("Support Ticket - {}", ticket.category), OPEN_COLOR)
        .description(ticket.description.clone())
        .field("Ticket ID", ticket.ticket_id.clone(), true)
        .field("Category", ticket.category.clone(), true)
        .field("Priority", ticket.priority.clone(), true)
        .timestamp(ticket.created_at);

    OutboundMessage::text(format!(
        "<@{}>, a support ticket has been created for you! Staff will be with you shortly.",
        ticket.user_id
    ))
    .with_embed(embed)
}

/// Notice posted when a ticket is closed, before the channel is deleted.
pub fn closing(ticket: &Ticket, delay_secs: u64) -> OutboundMessage {
    let closed_by = ticket.closed_by.as_deref().unwrap_or("staff");
    let reason = ticket
        .close_reason
        .as_deref()
        .unwrap_or("No reason provided");

    OutboundMessage::embed(
        EmbedSpec::new("Ticket Closed", CLOSE_COLOR)
            .description(format!(
                "This ticket has been closed by {}. This channel will be deleted in {} seconds.",
                closed_by, delay_secs
            ))
            .field("Reason", reason, false)
            .timestamp(ticket.closed_at.unwrap_or_else(Utc::now)),
    )
}
