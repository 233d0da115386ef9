//! Pure rule evaluation for automatic moderation.
//!
//! Rules run in a fixed order (spam, profanity, link, mentions) and every matching
//! rule contributes its reason to the verdict. Nothing here performs I/O; recent
//! channel history is passed in by the caller.

use std::collections::HashSet;

use chrono::Duration;
use url::Url;

use crate::server::{
    gateway::ChannelMessage,
    model::{
        automod::{AutoModSettings, ContentRules, DenyReason, Verdict},
        message::InboundMessage,
    },
};

/// Evaluates one inbound message.
///
/// Messages from bots and messages outside a guild are always allowed.
///
/// # Arguments
/// - `message` - The message being judged
/// - `settings` - Rule toggles and limits of the message's guild
/// - `rules` - Process-wide word and domain lists
/// - `recent` - Recent history of the message's channel; may or may not contain
///   `message` itself
pub fn evaluate(
    message: &InboundMessage,
    settings: &AutoModSettings,
    rules: &ContentRules,
    recent: &[ChannelMessage],
) -> Verdict {
    if message.author_is_bot || message.guild_id.is_none() {
        return Verdict::Allow;
    }

    let mut reasons = Vec::new();

    if settings.spam_detection && exceeds_rate(message, settings, recent) {
        reasons.push(DenyReason::Spam);
    }
    if settings.profanity_filter && contains_profanity(&message.content, &rules.profanity) {
        reasons.push(DenyReason::Profanity);
    }
    if settings.link_filter && has_unauthorized_link(&message.content, &rules.allowed_domains) {
        reasons.push(DenyReason::Link);
    }
    if exceeds_mentions(message, settings.max_mentions) {
        reasons.push(DenyReason::Mentions);
    }

    if reasons.is_empty() {
        Verdict::Allow
    } else {
        Verdict::Deny(reasons)
    }
}

/// Counts the author's messages inside the window ending at `message`, the message
/// itself included exactly once.
fn exceeds_rate(
    message: &InboundMessage,
    settings: &AutoModSettings,
    recent: &[ChannelMessage],
) -> bool {
    let window = Duration::seconds(i64::from(settings.time_window));

    let mut seen: HashSet<u64> = HashSet::from([message.id]);
    for m in recent {
        if m.author_id != message.author_id || m.channel_id != message.channel_id {
            continue;
        }
        let age = message.timestamp - m.timestamp;
        if age >= Duration::zero() && age <= window {
            seen.insert(m.id);
        }
    }

    seen.len() > settings.max_messages as usize
}

fn contains_profanity(content: &str, words: &[String]) -> bool {
    let content = content.to_lowercase();

    words
        .iter()
        .filter(|word| !word.is_empty())
        .any(|word| content.contains(word.as_str()))
}

fn has_unauthorized_link(content: &str, allowed_domains: &[String]) -> bool {
    links(content).any(|link| !is_allowed_link(link, allowed_domains))
}

/// Every `http://` or `https://` token, stripped of surrounding punctuation.
fn links(content: &str) -> impl Iterator<Item = &str> {
    content.split_whitespace().filter_map(|token| {
        let lower = token.to_ascii_lowercase();
        let start = match (lower.find("http://"), lower.find("https://")) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => return None,
        };

        Some(token[start..].trim_end_matches(|c: char| matches!(c, '>' | ')' | ']' | ',' | '.' | '!' | '?' | '"' | '\'')))
    })
}

/// A link passes when its host equals an allowed domain or is a subdomain of one.
/// Links that cannot be parsed never pass.
fn is_allowed_link(link: &str, allowed_domains: &[String]) -> bool {
    let Ok(url) = Url::parse(link) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.trim_end_matches('.').to_lowercase();

    allowed_domains.iter().any(|domain| {
        let domain = domain.trim_start_matches('.');
        !domain.is_empty() && (host == domain || host.ends_with(&format!(".{}", domain)))
    })
}

fn exceeds_mentions(message: &InboundMessage, max_mentions: u32) -> bool {
    let distinct: HashSet<u64> = message.mention_ids.iter().copied().collect();

    distinct.len() > max_mentions as usize
}
