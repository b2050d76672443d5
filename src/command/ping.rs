use serenity::async_trait;

use crate::{
    dispatch::{context::CommandContext, handler::CommandHandler},
    error::command::CommandError,
};

pub struct Ping;

#[async_trait]
impl CommandHandler for Ping {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        ctx.reply("Pong!");
        Ok(())
    }
}
