//! Request guards applied inside controllers.
//!
//! - `auth` - Bearer token authentication and role based access checks
//! - `validate` - JSON body extraction errors and `validator` rules mapped to 400 responses

pub mod auth;
pub mod validate;

#[cfg(test)]
mod test;
