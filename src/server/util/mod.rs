//! Small helpers shared by services.

pub mod password;
pub mod random;
