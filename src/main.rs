mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{bot, config::Config, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), server::error::AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let auth = startup::setup_authenticator(&config);

    tracing::info!("Starting server");

    // Run the chat bot beside the HTTP API when a bot token is configured
    if let Some(bot_token) = config.bot_token.clone() {
        let bot_db = db.clone();
        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(&bot_token, bot_db).await {
                tracing::error!("Chat bot error: {}", e);
            }
        });
    } else {
        tracing::info!("BOT_TOKEN not set, chat bot disabled");
    }

    let app = router::router().with_state(AppState::new(db, auth));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| {
            server::error::AppError::InternalError(format!(
                "Failed to bind {}: {}",
                config.bind_addr, e
            ))
        })?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await.map_err(|e| {
        server::error::AppError::InternalError(format!("Server error: {}", e))
    })?;

    Ok(())
}
