use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, AuthTokensDto, LoginDto, RefreshTokenDto, RegisterDto},
    },
    server::{
        error::AppError, middleware::validate::validate_body, model::user::CreateUserParams,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with the `participant` role and returns it together with a fresh
/// access and refresh token.
///
/// # Returns
/// - `201 Created` - Account created and logged in
/// - `400 Bad Request` - Invalid body or email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid body or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validate_body(payload)?;

    let service = AuthService::new(&state.db, state.tokens);
    let (user, tokens) = service.register(CreateUserParams::from(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            user: user.into_dto(),
            tokens: tokens.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - User and a fresh token pair
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Incorrect email or password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validate_body(payload)?;

    let service = AuthService::new(&state.db, state.tokens);
    let (user, tokens) = service.login(&payload.email, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            user: user.into_dto(),
            tokens: tokens.into_dto(),
        }),
    ))
}

/// Log out by revoking a refresh token.
///
/// # Returns
/// - `204 No Content` - Refresh token deleted
/// - `400 Bad Request` - Invalid body
/// - `404 Not Found` - Refresh token unknown
#[utoipa::path(
    post,
    path = "/v1/auth/logout",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 204, description = "Logged out"),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Refresh token not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    payload: Result<Json<RefreshTokenDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validate_body(payload)?;

    let service = AuthService::new(&state.db, state.tokens);
    service.logout(payload.refresh_token.trim()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Exchange a refresh token for a new token pair.
///
/// The presented refresh token is consumed.
///
/// # Returns
/// - `200 OK` - New access and refresh tokens
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Refresh token unknown, expired or already used
#[utoipa::path(
    post,
    path = "/v1/auth/refresh-tokens",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Tokens refreshed", body = AuthTokensDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_tokens(
    State(state): State<AppState>,
    payload: Result<Json<RefreshTokenDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validate_body(payload)?;

    let service = AuthService::new(&state.db, state.tokens);
    let tokens = service.refresh_auth(payload.refresh_token.trim()).await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}
