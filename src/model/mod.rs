//! Request and response shapes shared by the HTTP API.
//!
//! DTOs here are serialized with camelCase keys, carry `utoipa` schemas for the
//! OpenAPI document and, for request bodies, `validator` rules checked by the
//! controllers before any service call.

pub mod api;
pub mod auth;
pub mod dish;
pub mod event;
pub mod ingredient;
pub mod participant;
pub mod user;
pub mod validation;
