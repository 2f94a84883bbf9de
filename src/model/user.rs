use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::model::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,
    #[validate(custom(function = "crate::model::validation::password"))]
    pub password: String,
    #[validate(custom(function = "crate::model::validation::role"))]
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_user"))]
pub struct UpdateUserDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email"))]
    pub email: Option<String>,
    #[validate(custom(function = "crate::model::validation::password"))]
    pub password: Option<String>,
}

fn validate_update_user(dto: &UpdateUserDto) -> Result<(), ValidationError> {
    validation::at_least_one(&[
        dto.name.is_some(),
        dto.email.is_some(),
        dto.password.is_some(),
    ])
}

/// Query string of `GET /v1/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserQueryDto {
    /// Exact name filter
    pub name: Option<String>,
    /// Exact role filter
    #[validate(custom(function = "crate::model::validation::role"))]
    pub role: Option<String>,
    /// `field:asc` or `field:desc` where field is name, email, role or createdAt
    pub sort_by: Option<String>,
    /// Results per page (default: 10, at most 100)
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u64>,
    /// Page number starting at 1 (default: 1)
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedUsersDto {
    pub results: Vec<UserDto>,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_results: u64,
}
