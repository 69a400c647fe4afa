//! Message event handler carrying the bot's command dispatch.
//!
//! Every incoming message is parsed as a potential command; non-commands are
//! ignored. Command handlers resolve the sender to an account by their chat
//! platform id and run the same services the HTTP controllers use, so access
//! rules and lifecycle transitions behave identically on both surfaces.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};
use tracing::error;

use crate::server::bot::command::{Command, START_USAGE};
use crate::server::error::{auth::AuthError, AppError};
use crate::server::model::user::{Role, User};
use crate::server::service::trip::{RequestTripParam, TripService};
use crate::server::service::user::UserService;

/// Handles message creation, dispatching bot commands.
pub async fn handle_message(db: &DatabaseConnection, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(parsed) = Command::parse(&message.content) else {
        return;
    };

    let reply = match parsed {
        Ok(command) => {
            let platform_id = message.author.id.get();

            match dispatch(db, platform_id, command).await {
                Ok(reply) => reply,
                Err(e) => reply_for_error(e),
            }
        }
        Err(usage) => usage.to_string(),
    };

    if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
        error!("Failed to send bot reply: {:?}", e);
    }
}

async fn dispatch(
    db: &DatabaseConnection,
    platform_id: u64,
    command: Command,
) -> Result<String, AppError> {
    match command {
        Command::Start => Ok(START_USAGE.to_string()),
        Command::Register { role, name } => register(db, platform_id, role, name).await,
        Command::CreateTrip {
            origin,
            destination,
        } => create_trip(db, platform_id, origin, destination).await,
        Command::AssignDriver { trip_id, driver_id } => {
            assign_driver(db, platform_id, trip_id, driver_id).await
        }
        Command::CompleteTrip { trip_id } => complete_trip(db, platform_id, trip_id).await,
    }
}

async fn register(
    db: &DatabaseConnection,
    platform_id: u64,
    role: Role,
    name: String,
) -> Result<String, AppError> {
    let service = UserService::new(db);

    let user = service.register_external(platform_id, role, name).await?;

    Ok(format!(
        "Registered as {}: {}.",
        user.role.as_str(),
        user.display_name.unwrap_or_else(|| user.username.clone()),
    ))
}

async fn create_trip(
    db: &DatabaseConnection,
    platform_id: u64,
    origin: String,
    destination: String,
) -> Result<String, AppError> {
    let passenger = require_registered(db, platform_id).await?;

    let service = TripService::new(db);

    let trip = service
        .create(
            RequestTripParam {
                origin,
                destination,
                distance: None,
                price: None,
            },
            &passenger,
        )
        .await?;

    Ok(format!(
        "Trip created. ID: {}, route: {} -> {}",
        trip.id, trip.origin, trip.destination
    ))
}

async fn assign_driver(
    db: &DatabaseConnection,
    platform_id: u64,
    trip_id: i32,
    driver_id: i32,
) -> Result<String, AppError> {
    let actor = require_registered(db, platform_id).await?;

    let service = TripService::new(db);

    let trip = service.assign_driver(trip_id, driver_id, &actor).await?;

    Ok(format!("Assigned driver {} to trip {}.", driver_id, trip.id))
}

async fn complete_trip(
    db: &DatabaseConnection,
    platform_id: u64,
    trip_id: i32,
) -> Result<String, AppError> {
    let actor = require_registered(db, platform_id).await?;

    let service = TripService::new(db);

    let trip = service.complete(trip_id, &actor).await?;

    Ok(format!("Trip {} completed.", trip.id))
}

/// Resolves the sender to a registered, active account.
async fn require_registered(db: &DatabaseConnection, platform_id: u64) -> Result<User, AppError> {
    let service = UserService::new(db);

    let Some(user) = service.find_by_platform_id(platform_id).await? else {
        return Err(AuthError::UserNotFound.into());
    };

    if user.disabled {
        return Err(AuthError::AccountDisabled.into());
    }

    Ok(user)
}

/// Maps a dispatch error to a chat reply, hiding internal detail.
fn reply_for_error(error: AppError) -> String {
    match error {
        AppError::AuthErr(AuthError::UserNotFound) => {
            "You are not registered. Use /register <role> <name> first.".to_string()
        }
        AppError::AuthErr(AuthError::AccountDisabled) => "Your account is disabled.".to_string(),
        AppError::AuthErr(AuthError::AccessDenied(reason)) => reason,
        AppError::BadRequest(reason)
        | AppError::Conflict(reason)
        | AppError::InvalidTransition(reason)
        | AppError::NotFound(reason) => reason,
        other => {
            error!("Bot command failed: {:?}", other);
            "Something went wrong, try again later.".to_string()
        }
    }
}
