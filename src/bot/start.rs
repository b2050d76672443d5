use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::{
    bot::{handler::Handler, privilege::HttpPrivilegeSource},
    config::Config,
    dispatch::Dispatcher,
    error::AppError,
};

/// Creates the HTTP client shared by the gateway adapter and moderation service.
pub fn init_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_bot_token))
}

/// Initializes the Discord bot client.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for message listeners
/// - `http` - HTTP client used for privilege lookups
/// - `dispatcher` - Dispatcher serving slash commands
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    http: Arc<Http>,
    dispatcher: Arc<Dispatcher>,
) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(
        dispatcher,
        db,
        Arc::new(HttpPrivilegeSource::new(http)),
        config.custom_command_prefix.clone(),
        config.discord_dev_guild_id,
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// This function should be called from within a tokio::spawn task or at the end of
/// `main` since it will block until the bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError::DiscordErr)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
