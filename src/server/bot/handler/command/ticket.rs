use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::server::{
    bot::handler::Handler,
    error::AppError,
    model::ticket::{CloseTicketParams, OpenTicketParams, TicketPriority, TicketReference},
    service::ticket::TicketService,
};

use super::{edit_reply, reply, string_option, GUILD_ONLY};

pub fn register_ticket() -> CreateCommand {
    CreateCommand::new("ticket")
        .description("Open a private support ticket")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "category",
                "What do you need help with?",
            )
            .required(true)
            .add_string_choice("General Support", "general")
            .add_string_choice("Bug Report", "bug")
            .add_string_choice("Feature Request", "feature")
            .add_string_choice("Ban Appeal", "appeal"),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "description",
                "Describe your issue",
            )
            .required(true)
            .max_length(1000),
        )
}

pub fn register_close() -> CreateCommand {
    CreateCommand::new("close")
        .description("Close the ticket of this channel")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "reason",
            "Why the ticket is being closed",
        ))
}

pub async fn handle_ticket(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return reply(ctx, command, GUILD_ONLY).await;
    };

    command.defer_ephemeral(&ctx.http).await?;

    let result = TicketService::new(&handler.db, &handler.desk)
        .open(OpenTicketParams {
            guild_id: guild_id.get(),
            user_id: command.user.id.get(),
            username: command.user.name.clone(),
            category: string_option(command, "category").unwrap_or_else(|| "general".to_string()),
            description: string_option(command, "description").unwrap_or_default(),
            priority: TicketPriority::default(),
        })
        .await;

    let content = match result {
        Ok(ticket) => format!("Your ticket has been created: <#{}>", ticket.channel_id),
        Err(AppError::TicketErr(e)) => e.user_message().to_string(),
        Err(e) => {
            tracing::error!("Failed to open ticket for {}: {}", command.user.id, e);
            "Failed to create your ticket. Please try again later.".to_string()
        }
    };

    edit_reply(ctx, command, content).await
}

pub async fn handle_close(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    if command.guild_id.is_none() {
        return reply(ctx, command, GUILD_ONLY).await;
    }

    command.defer_ephemeral(&ctx.http).await?;

    let result = TicketService::new(&handler.db, &handler.desk)
        .close(CloseTicketParams {
            reference: TicketReference::Channel(command.channel_id.get()),
            closed_by: command.user.name.clone(),
            closed_by_id: Some(command.user.id.get()),
            reason: string_option(command, "reason"),
        })
        .await;

    let content = match result {
        Ok(ticket) => format!("Ticket {} closed.", ticket.ticket_id),
        Err(AppError::TicketErr(e)) => e.user_message().to_string(),
        Err(e) => {
            tracing::error!(
                "Failed to close ticket in channel {}: {}",
                command.channel_id,
                e
            );
            "Failed to close the ticket. Please try again later.".to_string()
        }
    };

    edit_reply(ctx, command, content).await
}
