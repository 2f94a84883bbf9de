use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    config::TokenSettings,
    error::{auth::AuthError, AppError},
    model::role::Role,
};


fn is_bad_request(result: &Result<impl std::fmt::Debug, AppError>, message: &str) -> bool {
    matches!(result, Err(AppError::BadRequest(msg)) if msg == message)
}

fn is_not_found(result: &Result<impl std::fmt::Debug, AppError>, message: &str) -> bool {
    matches!(result, Err(AppError::NotFound(msg)) if msg == message)
}
