//! Account linking commands backed by `UserMappingService`.

use serenity::async_trait;

use crate::{
    command::reply_on_bad_request,
    dispatch::{context::CommandContext, handler::CommandHandler},
    error::command::CommandError,
    service::user_mapping::UserMappingService,
};

pub struct Link;

#[async_trait]
impl CommandHandler for Link {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let account = ctx.args().string("account").unwrap_or_default();

        ctx.defer();
        ctx.ensure_active()?;
        let service = UserMappingService::new(ctx.db()?);
        let result = service.link(ctx.caller_id(), account).await;

        if let Some(mapping) = reply_on_bad_request(ctx, result)? {
            ctx.reply(format!(
                "Linked your account to `{}`.",
                mapping.account_name
            ));
        }
        Ok(())
    }
}

pub struct Unlink;

#[async_trait]
impl CommandHandler for Unlink {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        ctx.defer();
        ctx.ensure_active()?;
        let removed = UserMappingService::new(ctx.db()?)
            .unlink(ctx.caller_id())
            .await?;

        if removed {
            ctx.reply("Your account has been unlinked.");
        } else {
            ctx.reply("You don't have a linked account.");
        }
        Ok(())
    }
}

pub struct Whois;

#[async_trait]
impl CommandHandler for Whois {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(user_id) = ctx.args().user_id("user") else {
            ctx.reply("Could not find that user. Mention them or pass their user ID.");
            return Ok(());
        };

        ctx.defer();
        ctx.ensure_active()?;
        let mapping = UserMappingService::new(ctx.db()?).get(user_id).await?;

        match mapping {
            Some(mapping) => ctx.reply(format!(
                "<@{}> is linked to `{}`.",
                user_id, mapping.account_name
            )),
            None => ctx.reply(format!("<@{}> has not linked an account.", user_id)),
        }
        Ok(())
    }
}
