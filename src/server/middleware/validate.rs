use axum::{extract::rejection::JsonRejection, Json};
use validator::Validate;

use crate::server::error::AppError;

/// Unwraps a JSON body and runs its `validator` rules.
///
/// Handlers take the body as `Result<Json<T>, JsonRejection>` so the rejection is
/// reported only after the auth guard has run.
///
/// # Returns
/// - `Ok(T)` - Parsed and valid body
/// - `Err(AppError::JsonRejection)` - Body missing, malformed or of the wrong shape
/// - `Err(AppError::Validation)` - Body parsed but broke a validation rule
pub fn validate_body<T: Validate>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(body) = payload?;
    body.validate()?;

    Ok(body)
}
