use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::user::UserDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,
    #[validate(custom(function = "crate::model::validation::password"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "password must not be empty"))]
    pub password: String,
}

/// Body of `/logout` and `/refresh-tokens`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "refreshToken must not be empty"))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub expires: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthTokensDto {
    pub access: TokenDto,
    pub refresh: TokenDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub tokens: AuthTokensDto,
}
