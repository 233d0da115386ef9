//! `/kick`, `/ban`, `/unban`, `/timeout` and `/clear`.
//!
//! Each command checks the invoking member's permission, performs the action
//! through the Discord API and appends an entry to the moderation log.

use chrono::{DateTime, Duration, Utc};
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditMember, GetMessages, Permissions, Timestamp, UserId,
};

use crate::server::{
    bot::handler::Handler,
    error::AppError,
    model::mod_log::{CreateModLogParams, ModLogAction},
    service::moderation_log::ModLogService,
};

use super::{
    edit_reply, has_permission, integer_option, reply, string_option, user_option, GUILD_ONLY,
    NO_PERMISSION,
};

/// Discord caps timeouts at 28 days.
const MAX_TIMEOUT_MINUTES: i64 = 28 * 24 * 60;
const MAX_BAN_DELETE_DAYS: i64 = 7;
const MAX_CLEAR_AMOUNT: i64 = 100;
/// Bulk deletion only accepts messages younger than two weeks.
const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;
const DEFAULT_REASON: &str = "No reason provided";

fn user_and_reason(command: CreateCommand, verb: &str) -> CreateCommand {
    command
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", format!("Member to {}", verb))
                .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "reason",
            "Reason recorded in the audit and moderation logs",
        ))
}

pub fn register_kick() -> CreateCommand {
    user_and_reason(
        CreateCommand::new("kick")
            .description("Kick a member from the server")
            .default_member_permissions(Permissions::KICK_MEMBERS),
        "kick",
    )
}

pub fn register_ban() -> CreateCommand {
    user_and_reason(
        CreateCommand::new("ban")
            .description("Ban a member from the server")
            .default_member_permissions(Permissions::BAN_MEMBERS),
        "ban",
    )
    .add_option(
        CreateCommandOption::new(
            CommandOptionType::Integer,
            "delete_days",
            "Days of the member's messages to delete (0-7)",
        )
        .min_int_value(0)
        .max_int_value(MAX_BAN_DELETE_DAYS as u64),
    )
}

pub fn register_unban() -> CreateCommand {
    CreateCommand::new("unban")
        .description("Lift a ban")
        .default_member_permissions(Permissions::BAN_MEMBERS)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "user_id",
                "ID of the banned user",
            )
            .required(true),
        )
}

pub fn register_timeout() -> CreateCommand {
    CreateCommand::new("timeout")
        .description("Time out a member")
        .default_member_permissions(Permissions::MODERATE_MEMBERS)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Member to time out")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "minutes",
                "Length of the timeout in minutes",
            )
            .required(true)
            .min_int_value(1)
            .max_int_value(MAX_TIMEOUT_MINUTES as u64),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "reason",
            "Reason recorded in the audit and moderation logs",
        ))
}

pub fn register_clear() -> CreateCommand {
    CreateCommand::new("clear")
        .description("Delete recent messages in this channel")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "amount",
                "Number of messages to delete (1-100)",
            )
            .required(true)
            .min_int_value(1)
            .max_int_value(MAX_CLEAR_AMOUNT as u64),
        )
}

pub async fn handle_kick(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return reply(ctx, command, GUILD_ONLY).await;
    };
    if !has_permission(command, Permissions::KICK_MEMBERS) {
        return reply(ctx, command, NO_PERMISSION).await;
    }
    let Some(target) = user_option(command, "user") else {
        return reply(ctx, command, "Please specify a member.").await;
    };
    let reason = string_option(command, "reason");

    if let Err(e) = guild_id
        .kick_with_reason(&ctx.http, target, reason.as_deref().unwrap_or(DEFAULT_REASON))
        .await
    {
        tracing::warn!("Failed to kick {} from guild {}: {}", target, guild_id, e);
        return reply(ctx, command, format!("Failed to kick <@{}>.", target)).await;
    }

    record(
        handler,
        CreateModLogParams {
            action: ModLogAction::Kick,
            moderator_id: command.user.id.to_string(),
            target_id: Some(target.get()),
            reason,
            duration: None,
            guild_id: guild_id.get(),
        },
    )
    .await;

    reply(ctx, command, format!("Kicked <@{}>.", target)).await
}

pub async fn handle_ban(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return reply(ctx, command, GUILD_ONLY).await;
    };
    if !has_permission(command, Permissions::BAN_MEMBERS) {
        return reply(ctx, command, NO_PERMISSION).await;
    }
    let Some(target) = user_option(command, "user") else {
        return reply(ctx, command, "Please specify a member.").await;
    };
    let reason = string_option(command, "reason");
    let delete_days = ban_delete_days(integer_option(command, "delete_days"));

    if let Err(e) = guild_id
        .ban_with_reason(
            &ctx.http,
            target,
            delete_days,
            reason.as_deref().unwrap_or(DEFAULT_REASON),
        )
        .await
    {
        tracing::warn!("Failed to ban {} from guild {}: {}", target, guild_id, e);
        return reply(ctx, command, format!("Failed to ban <@{}>.", target)).await;
    }

    record(
        handler,
        CreateModLogParams {
            action: ModLogAction::Ban,
            moderator_id: command.user.id.to_string(),
            target_id: Some(target.get()),
            reason,
            duration: None,
            guild_id: guild_id.get(),
        },
    )
    .await;

    reply(ctx, command, format!("Banned <@{}>.", target)).await
}

pub async fn handle_unban(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return reply(ctx, command, GUILD_ONLY).await;
    };
    if !has_permission(command, Permissions::BAN_MEMBERS) {
        return reply(ctx, command, NO_PERMISSION).await;
    }
    let Some(target) = string_option(command, "user_id")
        .as_deref()
        .and_then(parse_user_id)
    else {
        return reply(ctx, command, "Please specify a valid user ID.").await;
    };

    if let Err(e) = guild_id.unban(&ctx.http, target).await {
        tracing::warn!("Failed to unban {} in guild {}: {}", target, guild_id, e);
        return reply(
            ctx,
            command,
            format!("Failed to unban {}. Make sure the user is banned.", target),
        )
        .await;
    }

    record(
        handler,
        CreateModLogParams {
            action: ModLogAction::Unban,
            moderator_id: command.user.id.to_string(),
            target_id: Some(target.get()),
            reason: None,
            duration: None,
            guild_id: guild_id.get(),
        },
    )
    .await;

    reply(ctx, command, format!("Unbanned <@{}>.", target)).await
}

pub async fn handle_timeout(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return reply(ctx, command, GUILD_ONLY).await;
    };
    if !has_permission(command, Permissions::MODERATE_MEMBERS) {
        return reply(ctx, command, NO_PERMISSION).await;
    }
    let Some(target) = user_option(command, "user") else {
        return reply(ctx, command, "Please specify a member.").await;
    };
    let Some(minutes) = timeout_minutes(integer_option(command, "minutes")) else {
        return reply(
            ctx,
            command,
            format!("Timeouts must be between 1 and {} minutes.", MAX_TIMEOUT_MINUTES),
        )
        .await;
    };
    let reason = string_option(command, "reason");

    let until = Timestamp::from(timeout_until(Utc::now(), minutes));

    let builder = EditMember::new()
        .disable_communication_until_datetime(until)
        .audit_log_reason(reason.as_deref().unwrap_or(DEFAULT_REASON));
    if let Err(e) = guild_id.edit_member(&ctx.http, target, builder).await {
        tracing::warn!("Failed to time out {} in guild {}: {}", target, guild_id, e);
        return reply(ctx, command, format!("Failed to time out <@{}>.", target)).await;
    }

    let duration = format_minutes(minutes);
    record(
        handler,
        CreateModLogParams {
            action: ModLogAction::Timeout,
            moderator_id: command.user.id.to_string(),
            target_id: Some(target.get()),
            reason,
            duration: Some(duration.clone()),
            guild_id: guild_id.get(),
        },
    )
    .await;

    reply(ctx, command, format!("Timed out <@{}> for {}.", target, duration)).await
}

pub async fn handle_clear(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return reply(ctx, command, GUILD_ONLY).await;
    };
    if !has_permission(command, Permissions::MANAGE_MESSAGES) {
        return reply(ctx, command, NO_PERMISSION).await;
    }
    let Some(amount) = clear_amount(integer_option(command, "amount")) else {
        return reply(
            ctx,
            command,
            format!("Amount must be between 1 and {}.", MAX_CLEAR_AMOUNT),
        )
        .await;
    };

    command.defer_ephemeral(&ctx.http).await?;

    let channel_id = command.channel_id;
    let messages = match channel_id
        .messages(&ctx.http, GetMessages::new().limit(amount))
        .await
    {
        Ok(messages) => messages,
        Err(e) => {
            tracing::warn!("Failed to fetch messages of channel {}: {}", channel_id, e);
            return edit_reply(ctx, command, "Failed to read messages in this channel.").await;
        }
    };

    let cutoff = Utc::now() - Duration::days(BULK_DELETE_MAX_AGE_DAYS);
    let ids: Vec<_> = messages
        .iter()
        .filter(|message| *message.timestamp > cutoff)
        .map(|message| message.id)
        .collect();

    if ids.is_empty() {
        return edit_reply(ctx, command, "No messages younger than 14 days to delete.").await;
    }

    if let Err(e) = channel_id.delete_messages(&ctx.http, &ids).await {
        tracing::warn!("Failed to clear messages in channel {}: {}", channel_id, e);
        return edit_reply(ctx, command, "Failed to delete messages.").await;
    }

    record(
        handler,
        CreateModLogParams {
            action: ModLogAction::Clear,
            moderator_id: command.user.id.to_string(),
            target_id: None,
            reason: Some(format!("Cleared {} messages in <#{}>", ids.len(), channel_id)),
            duration: None,
            guild_id: guild_id.get(),
        },
    )
    .await;

    edit_reply(ctx, command, format!("Deleted {} messages.", ids.len())).await
}

/// The action already happened; a failed log write is reported but not surfaced.
async fn record(handler: &Handler, params: CreateModLogParams) {
    let action = params.action;
    if let Err(e) = ModLogService::new(&handler.db).record(params).await {
        tracing::error!("Failed to record {} in moderation log: {}", action, e);
    }
}

/// Accepts a raw snowflake or a `<@id>` / `<@!id>` mention.
fn parse_user_id(value: &str) -> Option<UserId> {
    let value = value.trim();
    let id = value
        .strip_prefix("<@")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|rest| rest.trim_start_matches('!'))
        .unwrap_or(value);

    id.parse::<u64>().ok().filter(|id| *id != 0).map(UserId::new)
}

fn ban_delete_days(value: Option<i64>) -> u8 {
    value.unwrap_or(0).clamp(0, MAX_BAN_DELETE_DAYS) as u8
}

fn timeout_minutes(value: Option<i64>) -> Option<i64> {
    value.filter(|minutes| (1..=MAX_TIMEOUT_MINUTES).contains(minutes))
}

fn clear_amount(value: Option<i64>) -> Option<u8> {
    value
        .filter(|amount| (1..=MAX_CLEAR_AMOUNT).contains(amount))
        .map(|amount| amount as u8)
}

fn timeout_until(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    now + Duration::minutes(minutes)
}

fn format_minutes(minutes: i64) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", minutes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn ban_delete_days_defaults_and_clamps() {
        assert_eq!(ban_delete_days(None), 0);
        assert_eq!(ban_delete_days(Some(3)), 3);
        assert_eq!(ban_delete_days(Some(30)), 7);
        assert_eq!(ban_delete_days(Some(-2)), 0);
    }

    #[test]
    fn parses_unban_user_id() {
        assert_eq!(parse_user_id("1234"), Some(UserId::new(1234)));
        assert_eq!(parse_user_id(" <@1234> "), Some(UserId::new(1234)));
        assert_eq!(parse_user_id("<@!1234>"), Some(UserId::new(1234)));
        assert_eq!(parse_user_id("alice"), None);
        assert_eq!(parse_user_id("0"), None);
        assert_eq!(parse_user_id(""), None);
    }

    #[test]
    fn timeout_minutes_within_discord_limit() {
        assert_eq!(timeout_minutes(Some(10)), Some(10));
        assert_eq!(timeout_minutes(Some(MAX_TIMEOUT_MINUTES)), Some(MAX_TIMEOUT_MINUTES));
        assert_eq!(timeout_minutes(Some(0)), None);
        assert_eq!(timeout_minutes(Some(MAX_TIMEOUT_MINUTES + 1)), None);
        assert_eq!(timeout_minutes(None), None);
    }

    #[test]
    fn clear_amount_between_one_and_hundred() {
        assert_eq!(clear_amount(Some(1)), Some(1));
        assert_eq!(clear_amount(Some(100)), Some(100));
        assert_eq!(clear_amount(Some(0)), None);
        assert_eq!(clear_amount(Some(101)), None);
    }

    #[test]
    fn timeout_ends_after_given_minutes() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();

        assert_eq!(
            timeout_until(now, 90),
            Utc.with_ymd_and_hms(2026, 1, 1, 13, 30, 0).unwrap()
        );
    }

    #[test]
    fn formats_duration() {
        assert_eq!(format_minutes(1), "1 minute");
        assert_eq!(format_minutes(45), "45 minutes");
    }
}
