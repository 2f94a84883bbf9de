//! Recipebook Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the recipebook
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting test records.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_dish() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let cook = factory::user::UserFactory::new(db).role("cook").build().await?;
//!     let dish = factory::dish::DishFactory::new(db).created_by(cook.id).build().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
