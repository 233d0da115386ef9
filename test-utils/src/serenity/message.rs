//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Builds the JSON for a Discord user object.
fn user_json(user_id: u64, name: &str, bot: bool) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
    })
}

/// Creates a test Serenity Message sent by a human author.
///
/// # Arguments
/// - `message_id` - Discord message ID
/// - `channel_id` - Channel the message was sent in
/// - `guild_id` - Guild the channel belongs to, `None` for direct messages
/// - `author_id` - Discord ID of the author
/// - `author_name` - Username of the author
/// - `content` - Message text
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author_id: u64,
    author_name: &str,
    content: &str,
) -> Message {
    create_test_message_with_mentions(
        message_id,
        channel_id,
        guild_id,
        author_id,
        author_name,
        content,
        &[],
    )
}

/// Creates a test Serenity Message that mentions the given users.
///
/// Mentioned users are given generated usernames of the form `user<id>`.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message_with_mentions(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author_id: u64,
    author_name: &str,
    content: &str,
    mention_ids: &[u64],
) -> Message {
    let mentions: Vec<serde_json::Value> = mention_ids
        .iter()
        .map(|id| user_json(*id, &format!("user{}", id), false))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": user_json(author_id, author_name, false),
        "content": content,
        "timestamp": "2026-01-01T12:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": mentions,
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
