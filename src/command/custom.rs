//! Guild custom command management.

use serenity::async_trait;

use crate::{
    command::{reply_on_bad_request, require_guild},
    dispatch::{context::CommandContext, handler::CommandHandler},
    error::command::CommandError,
    service::custom_command::CustomCommandService,
};

pub struct AddCommand;

#[async_trait]
impl CommandHandler for AddCommand {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(guild_id) = require_guild(ctx) else {
            return Ok(());
        };
        let name = ctx.args().string("name").unwrap_or_default();
        let response = ctx.args().string("response").unwrap_or_default();

        ctx.defer();
        ctx.ensure_active()?;
        let service = CustomCommandService::new(ctx.db()?);
        let result = service
            .save(guild_id, name, response, ctx.caller_id())
            .await;

        if let Some((command, created)) = reply_on_bad_request(ctx, result)? {
            let verb = if created { "Created" } else { "Updated" };
            ctx.reply(format!("{} custom command `{}`.", verb, command.name));
        }
        Ok(())
    }
}

pub struct RemoveCommand;

#[async_trait]
impl CommandHandler for RemoveCommand {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(guild_id) = require_guild(ctx) else {
            return Ok(());
        };
        let name = ctx.args().string("name").unwrap_or_default();

        ctx.defer();
        ctx.ensure_active()?;
        let service = CustomCommandService::new(ctx.db()?);
        let result = service.remove(guild_id, name).await;

        match reply_on_bad_request(ctx, result)? {
            Some(true) => ctx.reply(format!("Removed custom command `{}`.", name.trim())),
            Some(false) => ctx.reply(format!("No custom command named `{}`.", name.trim())),
            None => {}
        }
        Ok(())
    }
}

pub struct ListCommands;

#[async_trait]
impl CommandHandler for ListCommands {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(guild_id) = require_guild(ctx) else {
            return Ok(());
        };

        ctx.defer();
        ctx.ensure_active()?;
        let commands = CustomCommandService::new(ctx.db()?).list(guild_id).await?;

        if commands.is_empty() {
            ctx.reply("This server has no custom commands.");
            return Ok(());
        }

        let names = commands
            .iter()
            .map(|command| format!("`{}`", command.name))
            .collect::<Vec<_>>()
            .join(", ");
        ctx.reply(format!("Custom commands: {}", names));
        Ok(())
    }
}
