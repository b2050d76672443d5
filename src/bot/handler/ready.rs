//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the handshake. Logs the connection and
//! publishes the current registry to Discord as application commands.

use serenity::all::{ActivityData, Context, Ready};

use crate::{bot::registration::register_commands, dispatch::Dispatcher};

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged; the bot keeps serving commands that Discord
/// already knows about.
///
/// # Arguments
/// - `dispatcher` - Dispatcher whose current registry is published
/// - `dev_guild_id` - Guild to register commands in instead of globally
/// - `ctx` - Discord context for setting activity status and HTTP access
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    dispatcher: &Dispatcher,
    dev_guild_id: Option<u64>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Type /help")));

    let registry = dispatcher.registry().snapshot();
    if let Err(e) = register_commands(&ctx.http, &registry, dev_guild_id).await {
        tracing::error!("Failed to register application commands: {:?}", e);
    }
}
