use std::sync::Arc;

use serenity::async_trait;

use crate::{
    dispatch::{context::CommandContext, handler::CommandHandler},
    error::command::CommandError,
    registry::DescriptorSource,
};

/// Reply when the rebuilt registry is rejected. The reason is only logged.
pub const FAILED_MESSAGE: &str =
    "Reload failed, keeping the current commands. Check the bot logs for details.";

/// Rebuilds the published registry from a descriptor source.
///
/// The running dispatch keeps the snapshot it started with.
pub struct Reload {
    source: Arc<dyn DescriptorSource>,
}

impl Reload {
    pub fn new(source: impl DescriptorSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

#[async_trait]
impl CommandHandler for Reload {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let handle = ctx
            .services()
            .registry
            .as_ref()
            .ok_or(CommandError::MissingService("registry"))?;

        match handle.reload(self.source.as_ref()) {
            Ok(registry) => ctx.reply(format!("Reloaded {} commands.", registry.len())),
            Err(e) => {
                tracing::error!("Reload requested by user {} failed: {}", ctx.caller_id(), e);
                ctx.reply(FAILED_MESSAGE);
            }
        }

        Ok(())
    }
}
