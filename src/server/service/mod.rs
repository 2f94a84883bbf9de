//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness checks on titles and emails, password hashing, token issuing
//! - **Orchestration**: Coordinating multiple repository calls such as appending to lists
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Not Found Errors**: Turning missing records into `AppError::NotFound`

pub mod auth;
pub mod dish;
pub mod event;
pub mod ingredient;
pub mod participant;
pub mod reset;
pub mod user;

#[cfg(test)]
mod test;
