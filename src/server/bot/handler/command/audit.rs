//! Audit trail of slash command invocations.

use serenity::all::{CommandDataOptionValue, CommandInteraction};

use crate::server::{
    model::command_log::CreateCommandLogParams, service::command_log::CommandLogService,
};

use crate::server::bot::handler::Handler;

/// Records the invocation before the command runs. Failures are logged and the
/// command still executes.
pub async fn record_invocation(handler: &Handler, command: &CommandInteraction) {
    let arguments = format_arguments(
        command
            .data
            .options
            .iter()
            .map(|option| (option.name.as_str(), &option.value)),
    );

    let params = CreateCommandLogParams {
        command_name: command.data.name.clone(),
        user_id: command.user.id.get(),
        username: command.user.name.clone(),
        channel_id: command.channel_id.get(),
        channel_name: command
            .channel
            .as_ref()
            .and_then(|channel| channel.name.clone()),
        guild_id: command.guild_id.map(|id| id.get()),
        arguments,
    };

    if let Err(e) = CommandLogService::new(&handler.db).record(params).await {
        tracing::error!(
            "Failed to record /{} by {}: {}",
            command.data.name,
            command.user.id,
            e
        );
    }
}

/// Renders options as `name: value` pairs joined by `, `.
fn format_arguments<'a>(
    options: impl IntoIterator<Item = (&'a str, &'a CommandDataOptionValue)>,
) -> String {
    options
        .into_iter()
        .map(|(name, value)| format!("{}: {}", name, option_text(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn option_text(value: &CommandDataOptionValue) -> String {
    match value {
        CommandDataOptionValue::String(value) => value.clone(),
        CommandDataOptionValue::Integer(value) => value.to_string(),
        CommandDataOptionValue::Number(value) => value.to_string(),
        CommandDataOptionValue::Boolean(value) => value.to_string(),
        CommandDataOptionValue::User(id) => id.to_string(),
        CommandDataOptionValue::Channel(id) => id.to_string(),
        CommandDataOptionValue::Role(id) => id.to_string(),
        CommandDataOptionValue::SubCommand(options)
        | CommandDataOptionValue::SubCommandGroup(options) => format!(
            "[{}]",
            format_arguments(
                options
                    .iter()
                    .map(|option| (option.name.as_str(), &option.value))
            )
        ),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::UserId;

    use super::*;

    #[test]
    fn formats_options_in_order() {
        let user = CommandDataOptionValue::User(UserId::new(20));
        let minutes = CommandDataOptionValue::Integer(15);
        let reason = CommandDataOptionValue::String("spam".to_string());

        let formatted = format_arguments([
            ("user", &user),
            ("minutes", &minutes),
            ("reason", &reason),
        ]);

        assert_eq!(formatted, "user: 20, minutes: 15, reason: spam");
    }

    #[test]
    fn formats_no_options_as_empty() {
        assert_eq!(format_arguments(std::iter::empty()), "");
    }
}
