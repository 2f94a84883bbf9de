//! Authentication service.
//!
//! Issues opaque bearer tokens and checks login credentials. Refresh tokens are
//! single use: refreshing deletes the presented token and issues a new pair.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::TokenSettings,
    data::{token::TokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        token::{AuthTokens, TokenKind},
        user::{CreateUserParams, User},
    },
    service::user::UserService,
    util::{password, random},
};

/// Service for account registration, login and token lifecycle.
pub struct AuthService<'a> {
    /// Database connection for user and token operations.
    pub db: &'a DatabaseConnection,
    /// Lifetimes applied to newly issued tokens.
    pub tokens: TokenSettings,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Access and refresh token lifetimes
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: TokenSettings) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and logs it in.
    ///
    /// # Arguments
    /// - `params` - New account fields, role is always `participant` for self-registration
    ///
    /// # Returns
    /// - `Ok((User, AuthTokens))` - Created user and a fresh token pair
    /// - `Err(AppError::BadRequest)` - Email already taken
    pub async fn register(&self, params: CreateUserParams) -> Result<(User, AuthTokens), AppError> {
        let user = UserService::new(self.db).create(params).await?;
        let tokens = self.generate_auth_tokens(user.id).await?;

        tracing::info!("Registered user {}", user.id);

        Ok((user, tokens))
    }

    /// Logs in with email and password.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok((User, AuthTokens))` - Authenticated user and a fresh token pair
    /// - `Err(AuthError::IncorrectCredentials)` - Email unknown or password wrong
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, AuthTokens), AppError> {
        let user_repo = UserRepository::new(self.db);
        let email = email.trim().to_lowercase();

        let Some((user, password_hash)) = user_repo.find_with_password_by_email(&email).await?
        else {
            return Err(AuthError::IncorrectCredentials.into());
        };

        if !password::verify(password, &password_hash) {
            return Err(AuthError::IncorrectCredentials.into());
        }

        let tokens = self.generate_auth_tokens(user.id).await?;

        Ok((user, tokens))
    }

    /// Logs out by deleting a refresh token.
    ///
    /// # Returns
    /// - `Ok(())` - Token deleted
    /// - `Err(AuthError::RefreshTokenNotFound)` - No live refresh token with that value
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let token_repo = TokenRepository::new(self.db);

        let token = token_repo
            .find(refresh_token, TokenKind::Refresh)
            .await?
            .filter(|token| !token.blacklisted)
            .ok_or(AuthError::RefreshTokenNotFound)?;

        token_repo.delete(token.id).await?;

        Ok(())
    }

    /// Exchanges a refresh token for a new token pair.
    ///
    /// # Returns
    /// - `Ok(AuthTokens)` - Fresh access and refresh tokens
    /// - `Err(AuthError::InvalidRefreshToken)` - Token unknown, expired, blacklisted, or its
    ///   user no longer exists
    pub async fn refresh_auth(&self, refresh_token: &str) -> Result<AuthTokens, AppError> {
        let token_repo = TokenRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let token = token_repo
            .find(refresh_token, TokenKind::Refresh)
            .await?
            .filter(|token| token.is_usable(Utc::now()))
            .ok_or(AuthError::InvalidRefreshToken)?;

        let Some(user) = user_repo.find_by_id(token.user_id).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        token_repo.delete(token.id).await?;

        self.generate_auth_tokens(user.id).await
    }

    /// Issues and stores a new access and refresh token for a user.
    pub async fn generate_auth_tokens(&self, user_id: i32) -> Result<AuthTokens, AppError> {
        let token_repo = TokenRepository::new(self.db);
        let now = Utc::now();

        let access = token_repo
            .create(
                user_id,
                TokenKind::Access,
                random::token(),
                now + self.tokens.access_ttl,
            )
            .await?;
        let refresh = token_repo
            .create(
                user_id,
                TokenKind::Refresh,
                random::token(),
                now + self.tokens.refresh_ttl,
            )
            .await?;

        Ok(AuthTokens { access, refresh })
    }
}
