use chrono::SecondsFormat;

use crate::server::gateway::ChannelMessage;

use super::TicketService;

/// Renders channel history as one `[<RFC3339>] <author>: <content>` line per message,
/// oldest first regardless of the order the messages were fetched in. Messages with
/// the same timestamp keep snowflake order.
pub fn render(mut messages: Vec<ChannelMessage>) -> String {
    messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));

    messages
        .iter()
        .map(|m| {
            format!(
                "[{}] {}: {}",
                m.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
                m.author_name,
                m.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl<'a> TicketService<'a> {
    /// Captures the transcript of a ticket channel.
    ///
    /// A failed history fetch does not block closing; the failure is logged and an
    /// empty transcript is stored.
    pub(super) async fn capture_transcript(&self, channel_id: u64) -> String {
        match self
            .desk
            .gateway
            .fetch_recent_messages(channel_id, self.desk.settings.transcript_limit)
            .await
        {
            Ok(messages) => render(messages),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch history of ticket channel {}, storing empty transcript: {}",
                    channel_id,
                    e
                );
                String::new()
            }
        }
    }
}
