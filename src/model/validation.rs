//! Custom `validator` rules shared by request DTOs.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use validator::ValidationError;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "must not be empty"));
    }

    Ok(())
}

/// Passwords need at least 8 characters including one letter and one digit.
pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < 8 {
        return Err(error(
            "password_length",
            "password must be at least 8 characters",
        ));
    }

    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(error(
            "password_strength",
            "password must contain at least 1 letter and 1 number",
        ));
    }

    Ok(())
}

/// Accepts only the role names `admin`, `cook` and `participant`.
pub fn role(value: &str) -> Result<(), ValidationError> {
    match value {
        "admin" | "cook" | "participant" => Ok(()),
        _ => Err(error(
            "role",
            "role must be one of admin, cook, participant",
        )),
    }
}

/// Shared by every update body: at least one field has to be present.
pub fn at_least_one(present: &[bool]) -> Result<(), ValidationError> {
    if present.iter().any(|p| *p) {
        return Ok(());
    }

    Err(error(
        "empty_update",
        "request body must contain at least one field",
    ))
}

/// `end` must not precede `start` when both dates are given.
pub fn date_order(
    start: Option<&DateTime<Utc>>,
    end: Option<&DateTime<Utc>>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(error(
            "date_order",
            "endDate must not be before startDate",
        )),
        _ => Ok(()),
    }
}
