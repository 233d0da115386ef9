mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    bot::{self, handler::Handler},
    config::Config,
    error::AppError,
    router,
    scheduler::release_announcer,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let gateway = startup::setup_gateway(&config);
    let ticket_desk = startup::setup_ticket_desk(&config, gateway.clone(), &http_client);
    let automod = startup::setup_automod(&config, gateway.clone());

    tracing::info!("Starting server");

    // Start Discord bot in a separate task
    let handler = Handler::new(db.clone(), ticket_desk.clone(), automod, config.guild_id);
    let bot_token = config.discord_bot_token.clone();
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(&bot_token, handler).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Start release announcement scheduler
    match startup::setup_release_announcer(&config, gateway, &http_client) {
        Some(announcer) => {
            tokio::spawn(async move {
                if let Err(e) = release_announcer::start_scheduler(announcer).await {
                    tracing::error!("Release announcement scheduler error: {}", e);
                }
            });
        }
        None => tracing::info!("Release announcements disabled"),
    }

    let app = router::router()
        .with_state(AppState::new(
            db,
            ticket_desk,
            config.guild_id,
            config.admin_api_token.clone(),
            config.game_server_auth_token.clone(),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Admin API listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
