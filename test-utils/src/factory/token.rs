//! Token factory for authenticating test requests.

use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating bearer tokens owned by a user.
///
/// Defaults to an unexpired, non-blacklisted access token valid for one hour.
pub struct TokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    kind: String,
    expires_in: Duration,
    blacklisted: bool,
}

impl<'a> TokenFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            kind: "access".to_string(),
            expires_in: Duration::hours(1),
            blacklisted: false,
        }
    }

    /// Makes this a refresh token instead of an access token.
    pub fn refresh(mut self) -> Self {
        self.kind = "refresh".to_string();
        self
    }

    /// Sets the lifetime relative to now. Negative durations create expired tokens.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    pub fn blacklisted(mut self, blacklisted: bool) -> Self {
        self.blacklisted = blacklisted;
        self
    }

    /// Builds and inserts the token record.
    ///
    /// # Returns
    /// - `Ok(entity::token::Model)` - Created token record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::token::Model, DbErr> {
        let now = Utc::now();
        let token: String = rand::rng()
            .sample_iter(rand::distr::Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        entity::token::ActiveModel {
            token: ActiveValue::Set(token),
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            expires_at: ActiveValue::Set(now + self.expires_in),
            blacklisted: ActiveValue::Set(self.blacklisted),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid access token for the user and returns the raw token string.
///
/// # Example
///
/// ```rust,ignore
/// let token = create_access_token(&db, cook.id).await?;
/// let header = format!("Bearer {}", token);
/// ```
pub async fn create_access_token(db: &DatabaseConnection, user_id: i32) -> Result<String, DbErr> {
    Ok(TokenFactory::new(db, user_id).build().await?.token)
}
