use serenity::async_trait;

use crate::{
    dispatch::{context::CommandContext, handler::CommandHandler},
    error::{command::CommandError, registry::RegistryError},
    model::command::{Category, CommandDescriptor, ParameterKind},
    registry::{DescriptorSource, Registry, RegistryHandle},
};


pub struct Noop;

#[async_trait]
impl CommandHandler for Noop {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        ctx.reply("ok");
        Ok(())
    }
}

pub fn descriptor(name: &str) -> CommandDescriptor {
    CommandDescriptor::new(name, format!("The {} command", name), Noop)
}

pub struct StaticSource(pub Vec<CommandDescriptor>);

impl DescriptorSource for StaticSource {
    fn load_descriptors(&self) -> Vec<CommandDescriptor> {
        self.0.clone()
    }
}
