//! Service layer for business logic.
//!
//! Services sit between command handlers and the data layer. They validate user
//! input, normalize it and orchestrate repository calls, working with domain models.
//! Validation failures are returned as `AppError::BadRequest` with a message that
//! is safe to show to the caller.

pub mod custom_command;
pub mod user_mapping;

#[cfg(test)]
mod test;
