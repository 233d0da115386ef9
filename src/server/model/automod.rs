//! Domain models for the automatic moderation rules.

use std::fmt;

use crate::model::automod::AutoModSettingsDto;

/// Per-guild rule configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoModSettings {
    pub spam_detection: bool,
    pub profanity_filter: bool,
    pub link_filter: bool,
    /// Highest number of distinct user mentions allowed in one message.
    pub max_mentions: u32,
    /// Highest number of messages allowed inside the rate window.
    pub max_messages: u32,
    /// Rate window length in seconds.
    pub time_window: u32,
}

impl Default for AutoModSettings {
    fn default() -> Self {
        Self {
            spam_detection: true,
            profanity_filter: true,
            link_filter: false,
            max_mentions: 5,
            max_messages: 10,
            time_window: 10,
        }
    }
}

impl AutoModSettings {
    /// Negative stored limits are clamped to zero.
    pub fn from_entity(entity: entity::automod_settings::Model) -> Self {
        Self {
            spam_detection: entity.spam_detection,
            profanity_filter: entity.profanity_filter,
            link_filter: entity.link_filter,
            max_mentions: entity.max_mentions.max(0) as u32,
            max_messages: entity.max_messages.max(0) as u32,
            time_window: entity.time_window.max(0) as u32,
        }
    }

    pub fn from_dto(dto: AutoModSettingsDto) -> Self {
        Self {
            spam_detection: dto.spam_detection,
            profanity_filter: dto.profanity_filter,
            link_filter: dto.link_filter,
            max_mentions: dto.max_mentions,
            max_messages: dto.max_messages,
            time_window: dto.time_window,
        }
    }

    pub fn into_dto(self) -> AutoModSettingsDto {
        AutoModSettingsDto {
            spam_detection: self.spam_detection,
            profanity_filter: self.profanity_filter,
            link_filter: self.link_filter,
            max_mentions: self.max_mentions,
            max_messages: self.max_messages,
            time_window: self.time_window,
        }
    }
}

/// Process-wide content lists shared by every guild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentRules {
    /// Lowercased block-listed words.
    pub profanity: Vec<String>,
    /// Lowercased domains whose links (and subdomains) are allowed.
    pub allowed_domains: Vec<String>,
}

/// Why a message was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Spam,
    Profanity,
    Link,
    Mentions,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spam => "spam detection",
            Self::Profanity => "profanity detected",
            Self::Link => "unauthorized link",
            Self::Mentions => "excessive mentions",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one message.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Allow,
    /// Every matching reason, in rule order. Never empty.
    Deny(Vec<DenyReason>),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The first matching reason.
    pub fn primary_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allow => None,
            Self::Deny(reasons) => reasons.first().copied(),
        }
    }
}
