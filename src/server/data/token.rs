//! Token data repository.
//!
//! Stores issued access and refresh tokens. Validity (expiry and blacklist) is judged
//! by the caller on the returned `Token`.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::token::{Token, TokenKind};

pub struct TokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a newly generated token for a user.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the token
    /// - `kind` - Access or refresh
    /// - `token` - Random token string
    /// - `expires_at` - Expiry instant
    ///
    /// # Returns
    /// - `Ok(Token)` - The stored token
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        kind: TokenKind,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Token, DbErr> {
        let entity = entity::token::ActiveModel {
            token: ActiveValue::Set(token),
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            expires_at: ActiveValue::Set(expires_at),
            blacklisted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Token::from_entity(entity)
    }

    /// Finds a token of the given kind by its string value.
    ///
    /// Expired and blacklisted tokens are returned as well.
    pub async fn find(&self, token: &str, kind: TokenKind) -> Result<Option<Token>, DbErr> {
        entity::prelude::Token::find()
            .filter(entity::token::Column::Token.eq(token))
            .filter(entity::token::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await?
            .map(Token::from_entity)
            .transpose()
    }

    /// Deletes a token by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Token deleted
    /// - `Ok(false)` - Token did not exist
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Token::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every token owned by a user and returns how many were removed.
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Token::delete_many()
            .filter(entity::token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
