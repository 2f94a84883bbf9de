//! Bearer token guard for role gated routes.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{token::TokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{role::Right, token::TokenKind, user::User},
};

/// Resolves the caller from the `Authorization` header and checks their rights.
///
/// # Example
///
/// ```rust,ignore
/// let user = AuthGuard::new(&state.db, &headers)
///     .require(&[Right::ManageDishes])
///     .await?;
/// ```
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Authenticates the caller and requires every right in `rights`.
    ///
    /// An empty slice only requires a valid access token.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all rights
    /// - `Err(AuthError::MissingBearerToken | InvalidToken | UserNotInDatabase)` - 401
    /// - `Err(AuthError::AccessDenied)` - 403, the user's role lacks a right
    pub async fn require(&self, rights: &[Right]) -> Result<User, AppError> {
        let user = self.authenticate().await?;

        if let Some(missing) = rights.iter().find(|right| !user.role.has_right(**right)) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("role '{}' lacks right '{}'", user.role, missing),
            )
            .into());
        }

        Ok(user)
    }

    /// Like `require`, but also lets a user act on their own record.
    ///
    /// # Arguments
    /// - `rights` - Rights required when acting on another user
    /// - `user_id` - ID of the user record the route targets
    pub async fn require_or_self(&self, rights: &[Right], user_id: i32) -> Result<User, AppError> {
        let user = self.authenticate().await?;

        if user.id == user_id || user.role.has_rights(rights) {
            return Ok(user);
        }

        Err(AuthError::AccessDenied(
            user.id,
            format!("role '{}' may not act on user {}", user.role, user_id),
        )
        .into())
    }

    async fn authenticate(&self) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingBearerToken)?;

        let token = TokenRepository::new(self.db)
            .find(token, TokenKind::Access)
            .await?
            .filter(|token| token.is_usable(Utc::now()))
            .ok_or(AuthError::InvalidToken)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(token.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(token.user_id).into());
        };

        Ok(user)
    }
}

/// Extracts `<token>` from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
