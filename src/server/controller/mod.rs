//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard` where the route is role gated,
//! validates the request body, converts DTOs into params, calls a service and
//! converts the returned domain model back into a DTO.

pub mod auth;
pub mod dev;
pub mod dish;
pub mod event;
pub mod ingredient;
pub mod participant;
pub mod user;
