//! Command descriptors and the parameter schema they declare.
//!
//! A `CommandDescriptor` is the static, declarative record a command source hands to
//! the registry: name, description, optional category, parameter declarations and the
//! handler. Parameter kinds are declared as text and only become typed
//! `ParameterSpec`s once the registry has validated them at load time.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::dispatch::handler::CommandHandler;

/// Presentation grouping for commands, used by help listings and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    General,
    Utility,
    Fun,
    Moderation,
    Profile,
    Custom,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Utility,
        Category::Fun,
        Category::Moderation,
        Category::Profile,
        Category::Custom,
    ];

    /// Lowercase label used in help output and the `category` help argument.
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Utility => "utility",
            Category::Fun => "fun",
            Category::Moderation => "moderation",
            Category::Profile => "profile",
            Category::Custom => "custom",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepted kinds of command argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    String,
    Integer,
    Boolean,
    UserReference,
    RoleReference,
}

impl ParameterKind {
    /// The declarative spelling of this kind, as written in descriptors.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::String => "string",
            ParameterKind::Integer => "integer",
            ParameterKind::Boolean => "boolean",
            ParameterKind::UserReference => "user-reference",
            ParameterKind::RoleReference => "role-reference",
        }
    }
}

impl FromStr for ParameterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ParameterKind::String),
            "integer" => Ok(ParameterKind::Integer),
            "boolean" => Ok(ParameterKind::Boolean),
            "user-reference" => Ok(ParameterKind::UserReference),
            "role-reference" => Ok(ParameterKind::RoleReference),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter as declared by a descriptor source, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    /// Argument name as the caller supplies it.
    pub name: String,
    /// Declared kind, parsed into `ParameterKind` when the registry is built.
    pub kind: String,
    /// Whether the caller must supply the argument.
    pub required: bool,
    /// Text shown by the chat client next to the option.
    pub description: String,
}

/// Parameter after load-time validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub kind: ParameterKind,
    pub required: bool,
    pub description: String,
}

/// Opaque capability tag naming a permission a caller may hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Privilege(String);

impl Privilege {
    pub const ADMINISTRATOR: &'static str = "administrator";
    pub const BAN_MEMBERS: &'static str = "ban-members";
    pub const KICK_MEMBERS: &'static str = "kick-members";
    pub const MODERATE_MEMBERS: &'static str = "moderate-members";
    pub const MANAGE_MESSAGES: &'static str = "manage-messages";
    pub const MANAGE_GUILD: &'static str = "manage-guild";
    pub const MANAGE_ROLES: &'static str = "manage-roles";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Privilege {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Static definition of one command.
///
/// Built with a small fluent API by descriptor sources:
///
/// ```rust,ignore
/// CommandDescriptor::new("ban", "Ban a member from this server", BanCommand)
///     .category(Category::Moderation)
///     .parameter("user", "user-reference", true, "Member to ban")
///     .required_privilege(Privilege::MODERATE_MEMBERS);
/// ```
#[derive(Clone)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
    pub parameters: Vec<ParameterDecl>,
    pub required_privilege: Option<Privilege>,
    pub handler: Arc<dyn CommandHandler>,
}

impl CommandDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl CommandHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: None,
            parameters: Vec::new(),
            required_privilege: None,
            handler: Arc::new(handler),
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Appends a parameter declaration. Order is preserved.
    pub fn parameter(
        mut self,
        name: impl Into<String>,
        kind: impl Into<String>,
        required: bool,
        description: impl Into<String>,
    ) -> Self {
        self.parameters.push(ParameterDecl {
            name: name.into(),
            kind: kind.into(),
            required,
            description: description.into(),
        });
        self
    }

    pub fn required_privilege(mut self, privilege: impl Into<Privilege>) -> Self {
        self.required_privilege = Some(privilege.into());
        self
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("parameters", &self.parameters)
            .field("required_privilege", &self.required_privilege)
            .finish_non_exhaustive()
    }
}
