use serenity::async_trait;

use crate::{dispatch::context::CommandContext, error::command::CommandError};

/// Executes one command.
///
/// Handlers reply through the context rather than returning content, so the
/// dispatcher can enforce the single-primary-reply rule. Returning `Err` or panicking
/// yields a generic `HandlerFault` outcome; the error itself is only logged.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError>;
}
