use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingBearerToken,

    /// Bearer token is unknown, expired, blacklisted or not an access token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// Token references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} referenced by token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks a right required by the route.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the user denied access
    /// - Description of what was denied
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown email or a wrong password.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Incorrect email or password")]
    IncorrectCredentials,

    /// Refresh token presented for a new token pair is unknown, expired or blacklisted.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Refresh token is invalid or expired")]
    InvalidRefreshToken,

    /// Logout with a refresh token that does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("Refresh token not found")]
    RefreshTokenNotFound,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingBearerToken` / `InvalidToken` / `UserNotInDatabase` / `InvalidRefreshToken`
///   → 401 Unauthorized with "Please authenticate"
/// - `IncorrectCredentials` → 401 Unauthorized with "Incorrect email or password"
/// - `AccessDenied` → 403 Forbidden with "Forbidden"
/// - `RefreshTokenNotFound` → 404 Not Found with "Not found"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingBearerToken
            | Self::InvalidToken
            | Self::UserNotInDatabase(_)
            | Self::InvalidRefreshToken => {
                error_response(StatusCode::UNAUTHORIZED, "Please authenticate")
            }
            Self::IncorrectCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Incorrect email or password")
            }
            Self::AccessDenied(_, _) => error_response(StatusCode::FORBIDDEN, "Forbidden"),
            Self::RefreshTokenNotFound => error_response(StatusCode::NOT_FOUND, "Not found"),
        }
    }
}
