use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub discord_bot_token: String,
    pub guild_id: u64,
    pub staff_role_ids: Vec<u64>,
    pub mod_log_channel_id: Option<u64>,

    pub admin_api_token: String,
    pub game_server_auth_token: Option<String>,

    pub profanity_words: Vec<String>,
    pub allowed_link_domains: Vec<String>,

    pub openai_api_key: Option<String>,
    pub openai_model: String,

    pub github_repository: Option<String>,
    pub github_token: Option<String>,
    pub github_announce_channel_id: Option<u64>,

    pub ticket_close_delay: Duration,
    pub ticket_assist_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            guild_id: parse_id("GUILD_ID", &required("GUILD_ID")?)?,
            staff_role_ids: optional("STAFF_ROLE_IDS")
                .map(|value| parse_id_list("STAFF_ROLE_IDS", &value))
                .transpose()?
                .unwrap_or_default(),
            mod_log_channel_id: optional("MOD_LOG_CHANNEL_ID")
                .map(|value| parse_id("MOD_LOG_CHANNEL_ID", &value))
                .transpose()?,
            admin_api_token: required("ADMIN_API_TOKEN")?,
            game_server_auth_token: optional("GAME_SERVER_AUTH_TOKEN"),
            profanity_words: optional("PROFANITY_WORDS")
                .map(|value| split_list(&value))
                .unwrap_or_default(),
            allowed_link_domains: optional("ALLOWED_LINK_DOMAINS")
                .map(|value| split_list(&value))
                .unwrap_or_default(),
            openai_api_key: optional("OPENAI_API_KEY"),
            openai_model: optional("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            github_repository: optional("GITHUB_REPOSITORY"),
            github_token: optional("GITHUB_TOKEN"),
            github_announce_channel_id: optional("GITHUB_ANNOUNCE_CHANNEL_ID")
                .map(|value| parse_id("GITHUB_ANNOUNCE_CHANNEL_ID", &value))
                .transpose()?,
            ticket_close_delay: Duration::from_secs(10),
            ticket_assist_delay: Duration::from_secs(3),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Empty values are treated the same as unset ones.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    split_list(value)
        .iter()
        .map(|id| parse_id(name, id))
        .collect()
}

/// Splits a comma separated list, lowercasing entries and dropping blanks.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}
