use serenity::async_trait;

use crate::{
    dispatch::{context::CommandContext, handler::CommandHandler},
    error::command::CommandError,
};

pub struct CoinFlip;

#[async_trait]
impl CommandHandler for CoinFlip {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let side = if rand::random_bool(0.5) { "Heads" } else { "Tails" };
        ctx.reply(format!("{}!", side));
        Ok(())
    }
}
