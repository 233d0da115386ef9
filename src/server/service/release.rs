//! Announces new GitHub releases of a configured repository in a Discord channel.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::server::{
    error::AppError,
    gateway::{ChannelGateway, EmbedSpec, OutboundMessage},
};

const GITHUB_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "guildwarden";
const RELEASE_COLOR: u32 = 0x24292E;
const MAX_NOTES_LEN: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub name: Option<String>,
    pub html_url: String,
    pub body: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Remembers the last seen release tag.
///
/// The first tag observed after startup is only remembered so a restart does not
/// re-announce the current release.
#[derive(Debug, Default)]
pub struct ReleaseTracker {
    last_tag: Option<String>,
}

impl ReleaseTracker {
    /// Records `tag` and returns whether it should be announced.
    pub fn observe(&mut self, tag: &str) -> bool {
        match self.last_tag.as_deref() {
            None => {
                self.last_tag = Some(tag.to_string());
                false
            }
            Some(last) if last == tag => false,
            Some(_) => {
                self.last_tag = Some(tag.to_string());
                true
            }
        }
    }
}

#[derive(Clone)]
pub struct ReleaseAnnouncer {
    http_client: reqwest::Client,
    gateway: Arc<dyn ChannelGateway>,
    repository: String,
    token: Option<String>,
    channel_id: u64,
    tracker: Arc<Mutex<ReleaseTracker>>,
}

impl ReleaseAnnouncer {
    /// # Arguments
    /// - `repository` - `owner/name` of the watched repository
    /// - `token` - Optional GitHub token, raises the API rate limit
    /// - `channel_id` - Discord channel receiving announcements
    pub fn new(
        http_client: reqwest::Client,
        gateway: Arc<dyn ChannelGateway>,
        repository: String,
        token: Option<String>,
        channel_id: u64,
    ) -> Self {
        Self {
            http_client,
            gateway,
            repository,
            token,
            channel_id,
            tracker: Arc::new(Mutex::new(ReleaseTracker::default())),
        }
    }

    /// Fetches the latest release and announces it if its tag is new.
    ///
    /// # Returns
    /// - `Ok(Some(Release))` - A new release was announced
    /// - `Ok(None)` - No release, or nothing new since the last check
    /// - `Err(AppError)` - GitHub request or Discord send failed
    pub async fn check(&self) -> Result<Option<Release>, AppError> {
        let Some(release) = self.fetch_latest().await? else {
            return Ok(None);
        };

        let is_new = match self.tracker.lock() {
            Ok(mut tracker) => tracker.observe(&release.tag_name),
            Err(poisoned) => poisoned.into_inner().observe(&release.tag_name),
        };
        if !is_new {
            return Ok(None);
        }

        self.gateway
            .send_message(
                self.channel_id,
                OutboundMessage::embed(announcement(&self.repository, &release)),
            )
            .await?;

        tracing::info!("Announced release {} of {}", release.tag_name, self.repository);

        Ok(Some(release))
    }

    /// A repository without releases answers 404.
    async fn fetch_latest(&self) -> Result<Option<Release>, AppError> {
        let url = format!("{}/repos/{}/releases/latest", GITHUB_API_URL, self.repository);

        let mut request = self
            .http_client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(response.error_for_status()?.json().await?))
    }
}

fn announcement(repository: &str, release: &Release) -> EmbedSpec {
    let title = match &release.name {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => release.tag_name.clone(),
    };

    let mut embed = EmbedSpec::new(format!("New release: {}", title), RELEASE_COLOR)
        .description(release_notes(release.body.as_deref()))
        .field("Repository", repository, true)
        .field("Tag", release.tag_name.clone(), true)
        .field("Link", release.html_url.clone(), false);
    if let Some(published_at) = release.published_at {
        embed = embed.timestamp(published_at);
    }
    embed
}

fn release_notes(body: Option<&str>) -> String {
    let body = body.map(str::trim).unwrap_or_default();
    if body.is_empty() {
        return "No release notes.".to_string();
    }
    if body.chars().count() <= MAX_NOTES_LEN {
        return body.to_string();
    }

    let mut notes: String = body.chars().take(MAX_NOTES_LEN - 1).collect();
    notes.push('…');
    notes
}
