use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use tracing::info;

use crate::server::bot::handler::Handler;
use crate::server::error::AppError;

/// Starts the chat bot in a blocking manner.
///
/// Creates and runs the bot client. Call from within a tokio::spawn task
/// since it blocks until the bot shuts down.
///
/// # Arguments
/// - `token` - Bot token from the `BOT_TOKEN` environment variable
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot runs to a clean shutdown
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(token: &str, db: DatabaseConnection) -> Result<(), AppError> {
    // MESSAGE_CONTENT is a privileged intent and must be enabled for the bot
    // application before commands can be read.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db);

    let mut client = Client::builder(token, intents).event_handler(handler).await?;

    info!("Starting bot...");

    client.start().await?;

    Ok(())
}
