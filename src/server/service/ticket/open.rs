//! Ticket opening.

use chrono::Utc;

use crate::server::{
    data::ticket::TicketRepository,
    error::{ticket::TicketError, AppError},
    gateway::PrivateChannelSpec,
    model::{
        mod_log::{CreateModLogParams, ModLogAction},
        ticket::{CreateTicketParams, OpenTicketParams, Ticket},
    },
    service::moderation_log::ModLogService,
};

use super::{naming, notice, TicketService};

impl<'a> TicketService<'a> {
    /// Opens a ticket for a requester.
    ///
    /// Runs under a per-requester lock so concurrent requests from one user are
    /// serialized; across processes the `open_user_id` unique column rejects the
    /// second insert. If persisting fails after the channel was created the channel
    /// is deleted again so no orphan is left behind.
    ///
    /// Posting the introduction, the activity log entry and the AI acknowledgement
    /// are best-effort and never fail the open.
    ///
    /// # Arguments
    /// - `params` - Requester, guild, category, description and priority
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The new open ticket
    /// - `Err(AppError::TicketErr(Duplicate))` - The requester already has an open ticket
    /// - `Err(AppError::GatewayErr)` - Category or channel creation failed; nothing persisted
    /// - `Err(AppError::DbErr)` - Database error; the created channel was removed
    pub async fn open(&self, params: OpenTicketParams) -> Result<Ticket, AppError> {
        let _guard = self
            .desk
            .locks
            .lock(format!("open:{}", params.user_id))
            .await;

        let repo = TicketRepository::new(self.db);
        if repo.find_open_by_user(params.user_id).await?.is_some() {
            return Err(TicketError::Duplicate {
                user_id: params.user_id,
            }
            .into());
        }

        let category_id = self.support_category(params.guild_id).await?;

        let now = Utc::now();
        let ticket_id = naming::ticket_id(&params.username, params.user_id, now);

        let channel_id = self
            .desk
            .gateway
            .create_private_channel(PrivateChannelSpec {
                guild_id: params.guild_id,
                name: ticket_id.clone(),
                parent_id: Some(category_id),
                member_ids: vec![params.user_id],
                role_ids: self.desk.settings.staff_role_ids.clone(),
            })
            .await?;

        let created = repo
            .create(CreateTicketParams {
                ticket_id,
                user_id: params.user_id,
                username: params.username,
                guild_id: params.guild_id,
                channel_id,
                category: params.category,
                priority: params.priority,
                description: params.description,
                created_at: now,
            })
            .await;

        let ticket = match created {
            Ok(ticket) => ticket,
            Err(e) => {
                if let Err(cleanup) = self.desk.gateway.delete_channel(channel_id).await {
                    tracing::error!(
                        "Failed to remove channel {} after ticket insert failed: {}",
                        channel_id,
                        cleanup
                    );
                }

                if is_open_ticket_conflict(&e) {
                    return Err(TicketError::Duplicate {
                        user_id: params.user_id,
                    }
                    .into());
                }
                return Err(e.into());
            }
        };

        tracing::info!(
            "Opened ticket {} for user {} in channel {}",
            ticket.ticket_id,
            ticket.user_id,
            channel_id
        );

        if let Err(e) = self
            .desk
            .gateway
            .send_message(channel_id, notice::introduction(&ticket))
            .await
        {
            tracing::error!(
                "Failed to post introduction for ticket {}: {}",
                ticket.ticket_id,
                e
            );
        }

        if let Err(e) = ModLogService::new(self.db)
            .record(CreateModLogParams {
                action: ModLogAction::TicketOpen,
                moderator_id: params.user_id.to_string(),
                target_id: Some(params.user_id),
                reason: Some(format!("Opened {}", ticket.ticket_id)),
                duration: None,
                guild_id: params.guild_id,
            })
            .await
        {
            tracing::error!("Failed to log opening of ticket {}: {}", ticket.ticket_id, e);
        }

        self.spawn_acknowledgement(&ticket, channel_id);

        Ok(ticket)
    }

    /// Finds the support category of a guild, creating it when missing.
    ///
    /// Serialized per guild so two first-time opens do not both create a category.
    async fn support_category(&self, guild_id: u64) -> Result<u64, AppError> {
        let _guard = self
            .desk
            .locks
            .lock(format!("category:{}", guild_id))
            .await;

        let settings = &self.desk.settings;
        if let Some(category_id) = self
            .desk
            .gateway
            .find_category(guild_id, &settings.category_match)
            .await?
        {
            return Ok(category_id);
        }

        let category_id = self
            .desk
            .gateway
            .create_category(guild_id, &settings.category_name)
            .await?;
        tracing::info!(
            "Created support category {} in guild {}",
            category_id,
            guild_id
        );

        Ok(category_id)
    }
}

/// Whether an insert failed because the requester already holds an open ticket.
fn is_open_ticket_conflict(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) if msg.contains("open_user_id")
    )
}
