use std::sync::Arc;

use serenity::{
    all::{
        ChannelId, ChannelType, CreateChannel, CreateEmbed, CreateMessage, GetMessages, GuildId,
        Message, MessageId, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId,
        Timestamp, UserId,
    },
    async_trait,
    http::Http,
};

use super::{
    ChannelGateway, ChannelMessage, EmbedSpec, GatewayError, OutboundMessage, PrivateChannelSpec,
};

/// [`ChannelGateway`] backed by the bot's serenity HTTP client.
#[derive(Clone)]
pub struct DiscordGateway {
    http: Arc<Http>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChannelGateway for DiscordGateway {
    async fn find_category(
        &self,
        guild_id: u64,
        name_fragment: &str,
    ) -> Result<Option<u64>, GatewayError> {
        let channels = GuildId::new(guild_id)
            .channels(&self.http)
            .await
            .map_err(|e| GatewayError::request("list channels", e))?;

        let needle = name_fragment.to_lowercase();
        let mut categories: Vec<_> = channels
            .values()
            .filter(|c| c.kind == ChannelType::Category)
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect();
        categories.sort_by_key(|c| (c.position, c.id));

        Ok(categories.first().map(|c| c.id.get()))
    }

    async fn create_category(&self, guild_id: u64, name: &str) -> Result<u64, GatewayError> {
        let category = GuildId::new(guild_id)
            .create_channel(&self.http, CreateChannel::new(name).kind(ChannelType::Category))
            .await
            .map_err(|e| GatewayError::request("create category", e))?;

        Ok(category.id.get())
    }

    async fn create_private_channel(&self, spec: PrivateChannelSpec) -> Result<u64, GatewayError> {
        let member_access = Permissions::VIEW_CHANNEL
            | Permissions::SEND_MESSAGES
            | Permissions::READ_MESSAGE_HISTORY;

        // The @everyone role shares its id with the guild.
        let mut overwrites = vec![PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            kind: PermissionOverwriteType::Role(RoleId::new(spec.guild_id)),
        }];
        overwrites.extend(spec.member_ids.iter().map(|id| PermissionOverwrite {
            allow: member_access,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(UserId::new(*id)),
        }));
        overwrites.extend(spec.role_ids.iter().map(|id| PermissionOverwrite {
            allow: member_access,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Role(RoleId::new(*id)),
        }));

        let mut builder = CreateChannel::new(&spec.name)
            .kind(ChannelType::Text)
            .permissions(overwrites);
        if let Some(parent_id) = spec.parent_id {
            builder = builder.category(ChannelId::new(parent_id));
        }

        let channel = GuildId::new(spec.guild_id)
            .create_channel(&self.http, builder)
            .await
            .map_err(|e| GatewayError::request("create channel", e))?;

        Ok(channel.id.get())
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), GatewayError> {
        self.http
            .delete_channel(ChannelId::new(channel_id), None)
            .await
            .map_err(|e| GatewayError::request("delete channel", e))?;

        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<u64, GatewayError> {
        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, build_message(message))
            .await
            .map_err(|e| GatewayError::request("send message", e))?;

        Ok(sent.id.get())
    }

    async fn fetch_recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, GatewayError> {
        let messages = ChannelId::new(channel_id)
            .messages(&self.http, GetMessages::new().limit(limit))
            .await
            .map_err(|e| GatewayError::request("fetch messages", e))?;

        Ok(messages.iter().map(channel_message).collect())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), GatewayError> {
        self.http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await
            .map_err(|e| GatewayError::request("delete message", e))
    }

    async fn send_direct_message(
        &self,
        user_id: u64,
        message: OutboundMessage,
    ) -> Result<(), GatewayError> {
        UserId::new(user_id)
            .direct_message(&self.http, build_message(message))
            .await
            .map_err(|e| GatewayError::request("direct message", e))?;

        Ok(())
    }

    async fn fetch_user_name(&self, user_id: u64) -> Result<String, GatewayError> {
        let user = self
            .http
            .get_user(UserId::new(user_id))
            .await
            .map_err(|e| GatewayError::request("fetch user", e))?;

        Ok(user.name)
    }
}

fn build_message(message: OutboundMessage) -> CreateMessage {
    let mut builder = CreateMessage::new();
    if let Some(content) = message.content {
        builder = builder.content(content);
    }
    if let Some(embed) = message.embed {
        builder = builder.embed(build_embed(embed));
    }
    builder
}

fn build_embed(spec: EmbedSpec) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title(spec.title).color(spec.color);
    if let Some(description) = spec.description {
        embed = embed.description(description);
    }
    for field in spec.fields {
        embed = embed.field(field.name, field.value, field.inline);
    }
    if let Some(timestamp) = spec.timestamp {
        embed = embed.timestamp(Timestamp::from(timestamp));
    }
    embed
}

/// Converts a serenity message into the gateway's history representation.
pub(crate) fn channel_message(message: &Message) -> ChannelMessage {
    ChannelMessage {
        id: message.id.get(),
        channel_id: message.channel_id.get(),
        author_id: message.author.id.get(),
        author_name: message.author.name.clone(),
        content: message.content.clone(),
        timestamp: *message.timestamp,
        is_bot: message.author.bot,
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::Timestamp;
    use test_utils::serenity::create_test_message;

    use super::channel_message;

    /// Tests converting a serenity message into channel history.
    ///
    /// Expected: ids, author and millisecond timestamp carried over
    #[test]
    fn converts_history_message_with_millis() {
        let mut message = create_test_message(5, 6, Some(7), 8, "bob", "hi there");
        message.timestamp = Timestamp::parse("2026-01-01T12:00:09.750Z").unwrap();

        let converted = channel_message(&message);

        assert_eq!(converted.id, 5);
        assert_eq!(converted.channel_id, 6);
        assert_eq!(converted.author_id, 8);
        assert_eq!(converted.author_name, "bob");
        assert!(!converted.is_bot);
        assert_eq!(converted.timestamp.timestamp_subsec_millis(), 750);
    }
}
