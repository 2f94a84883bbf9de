//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test records with sensible defaults,
//! reducing boilerplate in tests. Each record type has a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let cook = factory::user::UserFactory::new(&db).role("cook").build().await?;
//! let token = factory::token::create_access_token(&db, cook.id).await?;
//! let (dish, ingredient) = factory::helpers::create_dish_with_ingredient(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user records with a chosen role
//! - `token` - Create valid, expired, or refresh tokens for a user
//! - `dish` - Create dishes
//! - `ingredient` - Create ingredients, optionally linked to a dish
//! - `event` - Create events with an invitation code
//! - `participant` - Create participants
//! - `helpers` - Unique id counter and multi-record helpers

pub mod dish;
pub mod event;
pub mod helpers;
pub mod ingredient;
pub mod participant;
pub mod token;
pub mod user;

pub use dish::create_dish;
pub use event::create_event;
pub use ingredient::create_ingredient;
pub use participant::create_participant;
pub use token::create_access_token;
pub use user::create_user;
