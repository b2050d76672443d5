use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;

use crate::{dispatch::Dispatcher, gateway::PrivilegeSource};

pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: Arc<Dispatcher>,
    pub db: DatabaseConnection,
    pub privileges: Arc<dyn PrivilegeSource>,
    pub custom_command_prefix: String,
    pub dev_guild_id: Option<u64>,
}

impl Handler {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        db: DatabaseConnection,
        privileges: Arc<dyn PrivilegeSource>,
        custom_command_prefix: String,
        dev_guild_id: Option<u64>,
    ) -> Self {
        Self {
            dispatcher,
            db,
            privileges,
            custom_command_prefix,
            dev_guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.dispatcher, self.dev_guild_id, ctx, ready).await;
    }

    /// Called when a user invokes a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.dispatcher, &*self.privileges, ctx, interaction)
            .await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, &self.custom_command_prefix, ctx, message).await;
    }
}
