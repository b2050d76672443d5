//! `/ban` and `/kick`.
//!
//! Both run only inside a guild, refuse to target the caller and require the target
//! to be a Discord user ID or mention. Once the input checks pass the command defers,
//! then makes the outbound call through the `Moderation` service if the dispatch is
//! still active.

use serenity::async_trait;

use crate::{
    command::require_guild,
    dispatch::{context::CommandContext, handler::CommandHandler},
    error::command::CommandError,
};

const MAX_DELETE_DAYS: i64 = 7;

pub struct Ban;

#[async_trait]
impl CommandHandler for Ban {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(guild_id) = require_guild(ctx) else {
            return Ok(());
        };
        let Some(user_id) = target(ctx) else {
            return Ok(());
        };

        let delete_days = ctx.args().integer("delete_days").unwrap_or(0);
        if !(0..=MAX_DELETE_DAYS).contains(&delete_days) {
            ctx.reply(format!(
                "`delete_days` must be between 0 and {}.",
                MAX_DELETE_DAYS
            ));
            return Ok(());
        }
        let reason = ctx.args().string("reason");

        let moderation = ctx.moderation()?;
        ctx.defer();
        ctx.ensure_active()?;
        moderation
            .ban(guild_id, user_id, delete_days as u8, reason)
            .await?;

        tracing::info!(
            "User {} banned {} in guild {}",
            ctx.caller_id(),
            user_id,
            guild_id
        );
        ctx.reply(with_reason(format!("Banned <@{}>.", user_id), reason));
        Ok(())
    }
}

pub struct Kick;

#[async_trait]
impl CommandHandler for Kick {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(guild_id) = require_guild(ctx) else {
            return Ok(());
        };
        let Some(user_id) = target(ctx) else {
            return Ok(());
        };
        let reason = ctx.args().string("reason");

        let moderation = ctx.moderation()?;
        ctx.defer();
        ctx.ensure_active()?;
        moderation.kick(guild_id, user_id, reason).await?;

        tracing::info!(
            "User {} kicked {} in guild {}",
            ctx.caller_id(),
            user_id,
            guild_id
        );
        ctx.reply(with_reason(format!("Kicked <@{}>.", user_id), reason));
        Ok(())
    }
}

/// Resolves the `user` argument to a snowflake that is not the caller.
fn target(ctx: &CommandContext) -> Option<u64> {
    let action = ctx.command_name();
    let Some(user_id) = ctx.args().user_id("user") else {
        ctx.reply(format!(
            "Could not find that user. Mention them or pass their user ID to {}.",
            action
        ));
        return None;
    };

    if user_id == ctx.caller_id() {
        ctx.reply(format!("You cannot {} yourself.", action));
        return None;
    }

    Some(user_id)
}

fn with_reason(message: String, reason: Option<&str>) -> String {
    match reason {
        Some(reason) => format!("{} Reason: {}", message, reason),
        None => message,
    }
}
