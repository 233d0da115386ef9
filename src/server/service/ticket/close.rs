//! Ticket closing.

use chrono::Utc;

use crate::server::{
    data::ticket::TicketRepository,
    error::{ticket::TicketError, AppError},
    model::{
        mod_log::{CreateModLogParams, ModLogAction, ADMIN_API_ACTOR},
        ticket::{CloseTicketParams, CloseTicketRecord, Ticket, TicketReference},
    },
    service::moderation_log::ModLogService,
    util::parse::parse_u64_from_string,
};

use super::{notice, TicketService};

impl<'a> TicketService<'a> {
    /// Closes an open ticket.
    ///
    /// Closers of the same ticket are serialized by a per-ticket lock and the store
    /// update only applies while the ticket is still open, so of any number of
    /// concurrent closers exactly one succeeds and the others get `NotOpen`. The
    /// winner's transcript is the one persisted.
    ///
    /// The closing notice and log entry are best-effort; the channel is deleted after
    /// the configured grace delay by a detached task.
    ///
    /// # Arguments
    /// - `params` - Ticket reference, closer identity and optional reason
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The closed ticket
    /// - `Err(AppError::TicketErr(NotOpen))` - Unknown ticket or already closed
    /// - `Err(AppError::DbErr)` - Database error; the ticket stays open
    pub async fn close(&self, params: CloseTicketParams) -> Result<Ticket, AppError> {
        let repo = TicketRepository::new(self.db);
        let not_open = || TicketError::NotOpen(params.reference.to_string());

        let ticket = self
            .find_by_reference(&params.reference)
            .await?
            .filter(Ticket::is_open)
            .ok_or_else(not_open)?;

        let _guard = self.desk.locks.lock(format!("close:{}", ticket.id)).await;

        // A closer that waited on the lock finds the ticket already closed.
        if !repo
            .find_by_id(ticket.id)
            .await?
            .is_some_and(|t| t.is_open())
        {
            return Err(not_open().into());
        }

        let channel_id = parse_u64_from_string(&ticket.channel_id)?;
        let transcript = self.capture_transcript(channel_id).await;

        let closed = repo
            .close(
                ticket.id,
                CloseTicketRecord {
                    closed_at: Utc::now(),
                    closed_by: params.closed_by,
                    close_reason: params.reason,
                    transcript,
                },
            )
            .await?
            .ok_or_else(not_open)?;

        tracing::info!(
            "Closed ticket {} by {}",
            closed.ticket_id,
            closed.closed_by.as_deref().unwrap_or_default()
        );

        let delay = self.desk.settings.close_delay;
        if let Err(e) = self
            .desk
            .gateway
            .send_message(channel_id, notice::closing(&closed, delay.as_secs()))
            .await
        {
            tracing::error!(
                "Failed to post closing notice for ticket {}: {}",
                closed.ticket_id,
                e
            );
        }

        if let Err(e) = self.log_close(&closed, params.closed_by_id).await {
            tracing::error!("Failed to log closing of ticket {}: {}", closed.ticket_id, e);
        }

        let gateway = self.desk.gateway.clone();
        let ticket_id = closed.ticket_id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match gateway.delete_channel(channel_id).await {
                Ok(()) => tracing::debug!("Deleted channel of ticket {}", ticket_id),
                Err(e) => tracing::error!(
                    "Failed to delete channel {} of ticket {}: {}",
                    channel_id,
                    ticket_id,
                    e
                ),
            }
        });

        Ok(closed)
    }

    async fn log_close(&self, closed: &Ticket, closer_id: Option<u64>) -> Result<(), AppError> {
        ModLogService::new(self.db)
            .record(CreateModLogParams {
                action: ModLogAction::TicketClose,
                moderator_id: closer_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| ADMIN_API_ACTOR.to_string()),
                target_id: Some(parse_u64_from_string(&closed.user_id)?),
                reason: closed.close_reason.clone(),
                duration: None,
                guild_id: parse_u64_from_string(&closed.guild_id)?,
            })
            .await?;

        Ok(())
    }

    async fn find_by_reference(
        &self,
        reference: &TicketReference,
    ) -> Result<Option<Ticket>, AppError> {
        let repo = TicketRepository::new(self.db);

        let ticket = match reference {
            TicketReference::TicketId(ticket_id) => repo.find_by_ticket_id(ticket_id).await?,
            TicketReference::Channel(channel_id) => repo.find_by_channel_id(*channel_id).await?,
        };

        Ok(ticket)
    }
}
