use std::{sync::Arc, time::Duration};

use serenity::http::Http;

use crate::server::{
    config::Config,
    error::AppError,
    gateway::{ChannelGateway, DiscordGateway},
    service::{
        automod::AutoModEngine,
        release::ReleaseAnnouncer,
        ticket::{assist::OpenAiAssistant, TicketDesk, TicketSettings},
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for OpenAI and GitHub requests.
///
/// Redirects are disabled; neither API redirects on the endpoints used.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(30))
        .build()?)
}

/// Creates the Discord REST gateway used outside of event handlers.
pub fn setup_gateway(config: &Config) -> Arc<dyn ChannelGateway> {
    let http = Arc::new(Http::new(&config.discord_bot_token));
    Arc::new(DiscordGateway::new(http))
}

/// Builds the ticket desk, attaching the AI assistant when an OpenAI key is configured.
pub fn setup_ticket_desk(
    config: &Config,
    gateway: Arc<dyn ChannelGateway>,
    http_client: &reqwest::Client,
) -> TicketDesk {
    let desk = TicketDesk::new(gateway, TicketSettings::from_config(config));

    match &config.openai_api_key {
        Some(api_key) => {
            tracing::info!("AI ticket acknowledgements enabled ({})", config.openai_model);
            desk.with_assistant(Arc::new(OpenAiAssistant::new(
                http_client.clone(),
                api_key.clone(),
                config.openai_model.clone(),
            )))
        }
        None => desk,
    }
}

pub fn setup_automod(config: &Config, gateway: Arc<dyn ChannelGateway>) -> AutoModEngine {
    AutoModEngine::from_config(gateway, config)
}

/// Returns the release announcer when both the repository and the channel are configured.
pub fn setup_release_announcer(
    config: &Config,
    gateway: Arc<dyn ChannelGateway>,
    http_client: &reqwest::Client,
) -> Option<ReleaseAnnouncer> {
    let repository = config.github_repository.clone()?;
    let channel_id = config.github_announce_channel_id?;

    Some(ReleaseAnnouncer::new(
        http_client.clone(),
        gateway,
        repository,
        config.github_token.clone(),
        channel_id,
    ))
}
