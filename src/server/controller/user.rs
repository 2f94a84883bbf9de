use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, PaginatedUsersDto, UpdateUserDto, UserDto, UserQueryDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::validate_body},
        model::{
            role::Right,
            user::{CreateUserParams, UpdateUserParams, UserQueryParams},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a user with any role.
///
/// # Access Control
/// - `manageUsers` - Admins only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Name, email, password and role of the new user
///
/// # Returns
/// - `201 Created` - Successfully created user
/// - `400 Bad Request` - Invalid body or email already taken
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageUsers`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid body or email already taken", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageUsers])
        .await?;
    let payload = validate_body(payload)?;

    let service = UserService::new(&state.db);
    let user = service.create(CreateUserParams::from_dto(payload)?).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List users with filtering, sorting and pagination.
///
/// # Access Control
/// - `getUsers` - Admins only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Optional name and role filters, `sortBy`, `limit` and `page`
///
/// # Returns
/// - `200 OK` - One page of users with pagination metadata
/// - `400 Bad Request` - Invalid query parameters
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `getUsers`
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = USER_TAG,
    params(UserQueryDto),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::GetUsers])
        .await?;
    query.validate()?;

    let service = UserService::new(&state.db);
    let users = service.query(UserQueryParams::from_dto(query)?).await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get a user by ID.
///
/// # Access Control
/// - `getUsers` - Admins can view anyone
/// - Self - Any authenticated user can view their own record
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `getUsers` and is not the user
/// - `404 Not Found` - User not found
#[utoipa::path(
    get,
    path = "/v1/users/{userId}",
    tag = USER_TAG,
    params(
        ("userId" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require_or_self(&[Right::GetUsers], user_id)
        .await?;

    let service = UserService::new(&state.db);
    let user = service.get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's name, email or password.
///
/// # Access Control
/// - `manageUsers` - Admins can update anyone
/// - Self - Any authenticated user can update their own record
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Empty or invalid body, or email already taken
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageUsers` and is not the user
/// - `404 Not Found` - User not found
#[utoipa::path(
    patch,
    path = "/v1/users/{userId}",
    tag = USER_TAG,
    params(
        ("userId" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 400, description = "Invalid body or email already taken", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require_or_self(&[Right::ManageUsers], user_id)
        .await?;
    let payload = validate_body(payload)?;

    let service = UserService::new(&state.db);
    let user = service
        .update(user_id, UpdateUserParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user and its tokens.
///
/// # Access Control
/// - `manageUsers` - Admins can delete anyone
/// - Self - Any authenticated user can delete their own account
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageUsers` and is not the user
/// - `404 Not Found` - User not found
#[utoipa::path(
    delete,
    path = "/v1/users/{userId}",
    tag = USER_TAG,
    params(
        ("userId" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require_or_self(&[Right::ManageUsers], user_id)
        .await?;

    let service = UserService::new(&state.db);
    service.delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
