//! SeaORM entity definitions for the recipebook database.
//!
//! References between tables (dish ↔ ingredient, event ↔ participant, records ↔ creating
//! user) are plain id columns without foreign key constraints.

pub mod prelude;

pub mod dish;
pub mod dish_ingredient;
pub mod event;
pub mod event_participant;
pub mod ingredient;
pub mod participant;
pub mod token;
pub mod user;
