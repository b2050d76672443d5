//! Message listeners: custom command triggers and the mention greeting.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::service::custom_command::CustomCommandService;

const GREETING: &str = "Hi! Use `/help` to see what I can do.";

/// Handle message creation in a channel
///
/// Bot authors are ignored. In a guild, `<prefix><name>` replies with the stored
/// custom command response. Otherwise a message that mentions the bot gets a
/// short greeting.
pub async fn handle_message(
    db: &DatabaseConnection,
    prefix: &str,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    if let Some(guild_id) = message.guild_id {
        let service = CustomCommandService::new(db);
        match service
            .resolve_trigger(guild_id.get(), &message.content, prefix)
            .await
        {
            Ok(Some(response)) => {
                if let Err(e) = message.channel_id.say(&ctx, response).await {
                    tracing::error!(
                        "Failed to send custom command response in channel {}: {}",
                        message.channel_id,
                        e
                    );
                }
                return;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Failed to resolve custom command trigger: {:?}", e);
                return;
            }
        }
    }

    let bot_id = ctx.cache.current_user().id;
    if message.mentions_user_id(bot_id) {
        if let Err(e) = message.reply(&ctx, GREETING).await {
            tracing::error!("Failed to send greeting in channel {}: {}", message.channel_id, e);
        }
    }
}
