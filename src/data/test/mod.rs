mod custom_command;
mod user_mapping;
