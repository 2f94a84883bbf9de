//! User domain models and parameters.
//!
//! Provides the `User` domain model with its role, parameter types for account
//! creation and updates, and the query and pagination types behind `GET /v1/users`.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        auth::RegisterDto,
        user::{CreateUserDto, PaginatedUsersDto, UpdateUserDto, UserDto, UserQueryDto},
    },
    server::{
        error::AppError,
        model::{role::Role, trimmed, trimmed_opt},
    },
};

/// Default number of users per page.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Application user. The password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Lower-cased email address, unique across users.
    pub email: String,
    pub role: Role,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.to_string(),
            is_email_verified: self.is_email_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Type)` - The stored role is not one of the known roles
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity.role.parse::<Role>().map_err(DbErr::Type)?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role,
            is_email_verified: entity.is_email_verified,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for creating a user, either through registration or by an admin.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    /// Plain-text password, hashed by the service before it is stored.
    pub password: String,
    pub role: Role,
}

impl CreateUserParams {
    /// Builds params from an admin request body.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Trimmed params with lower-cased email
    /// - `Err(AppError::BadRequest)` - Role is not one of the known roles
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let role = dto.role.trim().parse::<Role>().map_err(AppError::BadRequest)?;

        Ok(Self {
            name: trimmed(dto.name),
            email: normalize_email(dto.email),
            password: dto.password,
            role,
        })
    }
}

impl From<RegisterDto> for CreateUserParams {
    fn from(dto: RegisterDto) -> Self {
        Self {
            name: trimmed(dto.name),
            email: normalize_email(dto.email),
            password: dto.password,
            role: Role::default(),
        }
    }
}

/// Parameters for updating a user. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserDto> for UpdateUserParams {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: trimmed_opt(dto.name),
            email: dto.email.map(normalize_email),
            password: dto.password,
        }
    }
}

/// Column a user listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    Name,
    Email,
    Role,
    CreatedAt,
}

/// Ordering parsed from a `field:asc|desc` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSort {
    pub field: UserSortField,
    pub descending: bool,
}

impl UserSort {
    /// Parses `field:asc` or `field:desc`. A bare field sorts ascending.
    ///
    /// # Returns
    /// - `Ok(UserSort)` - Parsed ordering
    /// - `Err(AppError::BadRequest)` - Unknown field or direction
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let (field, direction) = match value.split_once(':') {
            Some((field, direction)) => (field, direction),
            None => (value, "asc"),
        };

        let field = match field {
            "name" => UserSortField::Name,
            "email" => UserSortField::Email,
            "role" => UserSortField::Role,
            "createdAt" => UserSortField::CreatedAt,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "sortBy field must be one of name, email, role, createdAt, got '{}'",
                    field
                )))
            }
        };

        let descending = match direction {
            "asc" => false,
            "desc" => true,
            _ => {
                return Err(AppError::BadRequest(
                    "sortBy direction must be asc or desc".to_string(),
                ))
            }
        };

        Ok(Self { field, descending })
    }
}

/// Filters, ordering and page selection for listing users.
#[derive(Debug, Clone, PartialEq)]
pub struct UserQueryParams {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub sort: Option<UserSort>,
    /// Page size, at least 1.
    pub limit: u64,
    /// One-indexed page number.
    pub page: u64,
}

impl Default for UserQueryParams {
    fn default() -> Self {
        Self {
            name: None,
            role: None,
            sort: None,
            limit: DEFAULT_PAGE_LIMIT,
            page: 1,
        }
    }
}

impl UserQueryParams {
    pub fn from_dto(dto: UserQueryDto) -> Result<Self, AppError> {
        let role = match dto.role {
            Some(role) => Some(role.parse::<Role>().map_err(AppError::BadRequest)?),
            None => None,
        };
        let sort = match dto.sort_by.as_deref() {
            Some(sort_by) => Some(UserSort::parse(sort_by)?),
            None => None,
        };

        let limit = dto.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);
        let page = dto.page.unwrap_or(1).max(1);

        // SQLite takes OFFSET as a signed 64-bit integer.
        let offset = (page - 1)
            .checked_mul(limit)
            .filter(|offset| i64::try_from(*offset).is_ok());
        if offset.is_none() {
            return Err(AppError::BadRequest("page is out of range".to_string()));
        }

        Ok(Self {
            name: trimmed_opt(dto.name),
            role,
            sort,
            limit,
            page,
        })
    }
}

/// One page of users plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub results: Vec<User>,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_results: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            results: self.results.into_iter().map(User::into_dto).collect(),
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

fn normalize_email(email: String) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sort_with_direction() {
        let sort = UserSort::parse("createdAt:desc").unwrap();
        assert_eq!(sort.field, UserSortField::CreatedAt);
        assert!(sort.descending);

        let sort = UserSort::parse("name").unwrap();
        assert_eq!(sort.field, UserSortField::Name);
        assert!(!sort.descending);
    }

    #[test]
    fn rejects_unknown_sort_field() {
        assert!(matches!(
            UserSort::parse("password:asc"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            UserSort::parse("name:sideways"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn register_params_default_to_participant() {
        let params = CreateUserParams::from(RegisterDto {
            name: "  Ana ".to_string(),
            email: " Ana@Example.COM ".to_string(),
            password: "password1".to_string(),
        });

        assert_eq!(params.name, "Ana");
        assert_eq!(params.email, "ana@example.com");
        assert_eq!(params.role, Role::Participant);
    }

    #[test]
    fn rejects_page_past_offset_range() {
        let dto = UserQueryDto {
            page: Some(u64::MAX),
            ..UserQueryDto::default()
        };

        assert!(matches!(
            UserQueryParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn accepts_large_page_within_range() {
        let dto = UserQueryDto {
            page: Some(1000),
            limit: Some(100),
            ..UserQueryDto::default()
        };

        let params = UserQueryParams::from_dto(dto).unwrap();
        assert_eq!(params.page, 1000);
        assert_eq!(params.limit, 100);
    }

    #[test]
    fn query_defaults_page_and_limit() {
        let params = UserQueryParams::from_dto(UserQueryDto::default()).unwrap();

        assert_eq!(params, UserQueryParams::default());
    }
}
