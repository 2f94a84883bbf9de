//! Development-only routes, mounted when `APP_ENV=development`.

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::server::{error::AppError, service::reset::ResetService, state::AppState};

/// Delete every row in every table.
///
/// Used by end-to-end test suites to start from an empty database. Not authenticated,
/// which is why the route only exists in development.
///
/// # Returns
/// - `204 No Content` - Database emptied
/// - `500 Internal Server Error` - Database error
pub async fn reset_db(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    ResetService::new(&state.db).reset().await?;

    Ok(StatusCode::NO_CONTENT)
}

