//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let mapping = factory::create_user_mapping(&db).await?;
//!
//! let command = factory::custom_command::CustomCommandFactory::new(&db)
//!     .guild_id(100)
//!     .name("rules")
//!     .response("Be nice.")
//!     .build()
//!     .await?;
//! ```

pub mod custom_command;
pub mod helpers;
pub mod user_mapping;

pub use custom_command::create_custom_command;
pub use user_mapping::create_user_mapping;
