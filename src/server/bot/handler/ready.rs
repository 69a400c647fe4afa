//! Ready event handler for bot initialization.
//!
//! Fires once per connection after the gateway handshake completes, which is
//! the earliest point the bot can process commands.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to the gateway.
///
/// # Arguments
/// - `ctx` - Bot context
/// - `ready` - Ready event data containing the bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected and ready for commands", ready.user.name);
}
