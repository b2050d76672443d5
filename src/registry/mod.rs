//! Validated, immutable table of known commands.
//!
//! A `Registry` is built once from a sequence of `CommandDescriptor`s and never mutated
//! afterwards. Building validates every descriptor (name rules, unique names, parameter
//! kinds, required-before-optional ordering) and fails as a whole on the first problem,
//! so a partially valid registry is never observable. Reloading goes through
//! `RegistryHandle`, which swaps in a freshly built instance.

pub mod handle;

#[cfg(test)]
mod test;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    dispatch::handler::CommandHandler,
    error::registry::RegistryError,
    model::command::{Category, CommandDescriptor, ParameterKind, ParameterSpec, Privilege},
};

pub use handle::RegistryHandle;

const MAX_NAME_LENGTH: usize = 32;
const MAX_DESCRIPTION_LENGTH: usize = 100;

/// Supplies descriptors at startup and on every reload.
pub trait DescriptorSource: Send + Sync {
    fn load_descriptors(&self) -> Vec<CommandDescriptor>;
}

/// A command that passed load-time validation.
#[derive(Clone)]
pub struct RegisteredCommand {
    name: String,
    description: String,
    category: Option<Category>,
    parameters: Vec<ParameterSpec>,
    required_privilege: Option<Privilege>,
    handler: Arc<dyn CommandHandler>,
}

impl RegisteredCommand {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn required_privilege(&self) -> Option<&Privilege> {
        self.required_privilege.as_ref()
    }

    pub fn handler(&self) -> &Arc<dyn CommandHandler> {
        &self.handler
    }

    /// Validates a descriptor and converts its declared parameter kinds.
    fn from_descriptor(descriptor: CommandDescriptor) -> Result<Self, RegistryError> {
        validate_name(&descriptor.name)?;

        let schema_error = |reason: String| RegistryError::InvalidSchema {
            command: descriptor.name.clone(),
            reason,
        };

        let description_length = descriptor.description.chars().count();
        if description_length == 0 || description_length > MAX_DESCRIPTION_LENGTH {
            return Err(schema_error(format!(
                "description must be 1-{} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }

        let mut parameters = Vec::with_capacity(descriptor.parameters.len());
        let mut seen = HashSet::new();
        let mut optional_seen = false;

        for decl in &descriptor.parameters {
            if let Err(reason) = check_identifier(&decl.name) {
                return Err(schema_error(format!(
                    "parameter '{}' {}",
                    decl.name, reason
                )));
            }

            if !seen.insert(decl.name.as_str()) {
                return Err(schema_error(format!(
                    "parameter '{}' is declared more than once",
                    decl.name
                )));
            }

            let kind = decl.kind.parse::<ParameterKind>().map_err(|kind| {
                schema_error(format!(
                    "parameter '{}' has unrecognized kind '{}'",
                    decl.name, kind
                ))
            })?;

            if decl.required && optional_seen {
                return Err(schema_error(format!(
                    "required parameter '{}' follows an optional parameter",
                    decl.name
                )));
            }
            optional_seen |= !decl.required;

            parameters.push(ParameterSpec {
                name: decl.name.clone(),
                kind,
                required: decl.required,
                description: decl.description.clone(),
            });
        }

        Ok(Self {
            name: descriptor.name,
            description: descriptor.description,
            category: descriptor.category,
            parameters,
            required_privilege: descriptor.required_privilege,
            handler: descriptor.handler,
        })
    }
}

/// Immutable command table keyed by exact name.
pub struct Registry {
    by_name: HashMap<String, RegisteredCommand>,
    /// Names in ascending order, backing `list`.
    ordered: Vec<String>,
}

impl Registry {
    /// Builds a registry from descriptors.
    ///
    /// # Arguments
    /// - `descriptors` - Command descriptors in any order
    ///
    /// # Returns
    /// - `Ok(Registry)` - Every descriptor was valid and names are unique
    /// - `Err(RegistryError::DuplicateName)` - Two descriptors share a name
    /// - `Err(RegistryError::InvalidName)` - A name breaks the naming rules
    /// - `Err(RegistryError::InvalidSchema)` - A description or parameter schema is malformed
    pub fn build(
        descriptors: impl IntoIterator<Item = CommandDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::new();

        for descriptor in descriptors {
            let command = RegisteredCommand::from_descriptor(descriptor)?;

            if by_name.contains_key(&command.name) {
                return Err(RegistryError::DuplicateName(command.name));
            }

            by_name.insert(command.name.clone(), command);
        }

        let mut ordered: Vec<String> = by_name.keys().cloned().collect();
        ordered.sort();

        Ok(Self { by_name, ordered })
    }

    /// Builds a registry from everything a source currently provides.
    pub fn from_source(source: &dyn DescriptorSource) -> Result<Self, RegistryError> {
        Self::build(source.load_descriptors())
    }

    /// Finds a command by exact, case-sensitive name.
    pub fn lookup(&self, name: &str) -> Option<&RegisteredCommand> {
        self.by_name.get(name)
    }

    /// Iterates commands in ascending name order, optionally restricted to one category.
    ///
    /// The iterator borrows the registry; call `list` again to restart.
    pub fn list(
        &self,
        category: Option<Category>,
    ) -> impl Iterator<Item = &RegisteredCommand> + '_ {
        self.ordered
            .iter()
            .filter_map(|name| self.by_name.get(name))
            .filter(move |command| category.is_none() || command.category == category)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    check_identifier(name).map_err(|reason| RegistryError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// Shared naming rule for commands and parameters.
fn check_identifier(name: &str) -> Result<(), &'static str> {
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return Err("must be 1-32 characters");
    }

    if name.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err("may only contain lowercase letters, digits, '-' and '_'");
    }

    Ok(())
}
