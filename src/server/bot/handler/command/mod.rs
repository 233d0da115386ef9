//! Slash command registration and dispatch.
//!
//! Every reply is ephemeral. Commands that call Discord or the database before
//! answering defer first so the interaction token does not expire.

pub mod audit;
pub mod moderation;
pub mod ticket;

use serenity::all::{
    CommandDataOptionValue, CommandInteraction, Context, CreateCommand,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
    Permissions, UserId,
};

use crate::server::error::AppError;

use super::Handler;

const NO_PERMISSION: &str = "You do not have permission to use this command.";
const GUILD_ONLY: &str = "This command must be used in a server.";

/// All commands registered in the guild on ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        ticket::register_ticket(),
        ticket::register_close(),
        moderation::register_kick(),
        moderation::register_ban(),
        moderation::register_unban(),
        moderation::register_timeout(),
        moderation::register_clear(),
    ]
}

/// Records the invocation, then dispatches it to its handler.
pub async fn handle_command(handler: &Handler, ctx: Context, command: CommandInteraction) {
    audit::record_invocation(handler, &command).await;

    let result = match command.data.name.as_str() {
        "ticket" => ticket::handle_ticket(handler, &ctx, &command).await,
        "close" => ticket::handle_close(handler, &ctx, &command).await,
        "kick" => moderation::handle_kick(handler, &ctx, &command).await,
        "ban" => moderation::handle_ban(handler, &ctx, &command).await,
        "unban" => moderation::handle_unban(handler, &ctx, &command).await,
        "timeout" => moderation::handle_timeout(handler, &ctx, &command).await,
        "clear" => moderation::handle_clear(handler, &ctx, &command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle /{}: {}", command.data.name, e);
    }
}

fn option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a CommandDataOptionValue> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

fn string_option(command: &CommandInteraction, name: &str) -> Option<String> {
    match option(command, name)? {
        CommandDataOptionValue::String(value) => Some(value.clone()),
        _ => None,
    }
}

fn integer_option(command: &CommandInteraction, name: &str) -> Option<i64> {
    match option(command, name)? {
        CommandDataOptionValue::Integer(value) => Some(*value),
        _ => None,
    }
}

fn user_option(command: &CommandInteraction, name: &str) -> Option<UserId> {
    match option(command, name)? {
        CommandDataOptionValue::User(user_id) => Some(*user_id),
        _ => None,
    }
}

/// Permissions are resolved by Discord for the invoking member, channel overwrites included.
fn has_permission(command: &CommandInteraction, required: Permissions) -> bool {
    command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.contains(required))
}

async fn reply(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let response = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

/// Replaces the "thinking" placeholder of a deferred command.
async fn edit_reply(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}
