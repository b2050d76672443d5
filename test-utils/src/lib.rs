//! Courier Test Utils
//!
//! Provides shared testing utilities for the courier bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and factories
//! for inserting entity rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert `user_mapping` and `custom_command` rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::UserMapping;
//!
//! #[tokio::test]
//! async fn test_mapping() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(UserMapping)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
