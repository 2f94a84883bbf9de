//! Bearer token domain models.
//!
//! Tokens are opaque random strings stored in the `token` table. Access tokens
//! authenticate API requests; refresh tokens are exchanged for a new pair.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::str::FromStr;

use crate::model::auth::{AuthTokensDto, TokenDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenKind::Access),
            "refresh" => Ok(TokenKind::Refresh),
            other => Err(format!("Unknown token kind '{}'", other)),
        }
    }
}

/// Stored token row.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: i32,
    pub token: String,
    pub user_id: i32,
    pub kind: TokenKind,
    pub expires_at: DateTime<Utc>,
    pub blacklisted: bool,
}

impl Token {
    pub fn from_entity(entity: entity::token::Model) -> Result<Self, DbErr> {
        let kind = entity.kind.parse::<TokenKind>().map_err(DbErr::Type)?;

        Ok(Self {
            id: entity.id,
            token: entity.token,
            user_id: entity.user_id,
            kind,
            expires_at: entity.expires_at,
            blacklisted: entity.blacklisted,
        })
    }

    /// A token is usable when it is not blacklisted and has not expired.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        !self.blacklisted && self.expires_at > now
    }

    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            token: self.token,
            expires: self.expires_at,
        }
    }
}

/// Freshly issued access and refresh tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthTokens {
    pub access: Token,
    pub refresh: Token,
}

impl AuthTokens {
    pub fn into_dto(self) -> AuthTokensDto {
        AuthTokensDto {
            access: self.access.into_dto(),
            refresh: self.refresh.into_dto(),
        }
    }
}
