//! `/help`: lists commands from the registry snapshot of the current dispatch.
//!
//! With `verbose` set, each command is shown with its parameters.

use serenity::async_trait;

use crate::{
    dispatch::{context::CommandContext, handler::CommandHandler},
    error::command::CommandError,
    model::command::Category,
    registry::{RegisteredCommand, Registry},
};

pub struct Help;

#[async_trait]
impl CommandHandler for Help {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let registry = ctx.registry();
        let verbose = ctx.args().boolean("verbose").unwrap_or(false);

        let content = match ctx.args().string("category") {
            None => render_all(registry, verbose),
            Some(label) => match Category::from_label(label) {
                Some(category) => render_category(registry, category, verbose),
                None => format!(
                    "Unknown category `{}`. Available categories: {}.",
                    label,
                    Category::ALL
                        .iter()
                        .map(Category::label)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            },
        };

        ctx.reply(content);
        Ok(())
    }
}

/// Every command grouped under its category heading. Uncategorized commands go last.
fn render_all(registry: &Registry, verbose: bool) -> String {
    let mut sections: Vec<String> = Category::ALL
        .iter()
        .filter_map(|category| {
            let lines = command_lines(registry, Some(*category), verbose);
            (!lines.is_empty()).then(|| format!("**{}**\n{}", category, lines.join("\n")))
        })
        .collect();

    let uncategorized: Vec<String> = registry
        .list(None)
        .filter(|command| command.category().is_none())
        .map(|command| command_line(command, verbose))
        .collect();
    if !uncategorized.is_empty() {
        sections.push(format!("**other**\n{}", uncategorized.join("\n")));
    }

    if sections.is_empty() {
        return "No commands are available.".to_string();
    }

    sections.join("\n\n")
}

fn render_category(registry: &Registry, category: Category, verbose: bool) -> String {
    let lines = command_lines(registry, Some(category), verbose);

    if lines.is_empty() {
        return format!("No commands in category `{}`.", category);
    }

    format!("**{}**\n{}", category, lines.join("\n"))
}

fn command_lines(registry: &Registry, category: Option<Category>, verbose: bool) -> Vec<String> {
    registry
        .list(category)
        .map(|command| command_line(command, verbose))
        .collect()
}

/// `/name - description`, with `<required>` and `[optional]` parameters when verbose.
fn command_line(command: &RegisteredCommand, verbose: bool) -> String {
    let mut usage = format!("/{}", command.name());
    if verbose {
        for parameter in command.parameters() {
            if parameter.required {
                usage.push_str(&format!(" <{}>", parameter.name));
            } else {
                usage.push_str(&format!(" [{}]", parameter.name));
            }
        }
    }

    format!("`{}` - {}", usage, command.description())
}
