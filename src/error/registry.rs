use thiserror::Error;

/// Load-time failures while building a command registry.
///
/// Any of these aborts the whole build: a registry is either published complete or
/// not at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two descriptors declare the same command name.
    #[error("Duplicate command name '{0}'")]
    DuplicateName(String),

    /// A command name breaks the naming rules (lowercase, no whitespace, 1-32 chars).
    #[error("Invalid command name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Which rule was broken
        reason: String,
    },

    /// A descriptor's description or parameter schema is malformed.
    ///
    /// Covers unrecognized parameter kinds, a required parameter following an
    /// optional one, duplicated parameter names and empty descriptions.
    #[error("Invalid schema for command '{command}': {reason}")]
    InvalidSchema {
        /// Name of the command whose schema was rejected
        command: String,
        /// Which rule was broken
        reason: String,
    },
}
