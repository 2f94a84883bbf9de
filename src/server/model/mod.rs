//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs and carry already trimmed values.

pub mod dish;
pub mod event;
pub mod ingredient;
pub mod participant;
pub mod role;
pub mod token;
pub mod user;

/// Trims a required string field.
pub(crate) fn trimmed(value: String) -> String {
    value.trim().to_string()
}

/// Trims an optional string field, keeping `None` as is.
pub(crate) fn trimmed_opt(value: Option<String>) -> Option<String> {
    value.map(trimmed)
}
