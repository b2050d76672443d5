pub use super::custom_command::Entity as CustomCommand;
pub use super::user_mapping::Entity as UserMapping;
