use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        dish::{CreateDishDto, DishDto, DishQueryDto, UpdateDishDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::validate_body},
        model::{
            dish::{CreateDishParams, UpdateDishParams},
            role::Right,
        },
        service::dish::DishService,
        state::AppState,
    },
};

/// Tag for grouping dish endpoints in OpenAPI documentation
pub static DISH_TAG: &str = "dish";

/// Create a new dish.
///
/// The caller is recorded as the dish's creator and the ingredient list starts empty.
///
/// # Access Control
/// - `manageDishes` - Cooks only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Title and optional subtitle, description and image URL
///
/// # Returns
/// - `201 Created` - Successfully created dish
/// - `400 Bad Request` - Invalid body or title already taken
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageDishes`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/dish",
    tag = DISH_TAG,
    request_body = CreateDishDto,
    responses(
        (status = 201, description = "Successfully created dish", body = DishDto),
        (status = 400, description = "Invalid body or title already taken", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn create_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateDishDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageDishes])
        .await?;
    let payload = validate_body(payload)?;

    let service = DishService::new(&state.db);
    let dish = service
        .create(CreateDishParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(dish.into_dto())))
}

/// List dishes.
///
/// Public. An optional `title` query parameter filters by exact title.
///
/// # Returns
/// - `200 OK` - Array of dishes ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/dish",
    tag = DISH_TAG,
    params(DishQueryDto),
    responses(
        (status = 200, description = "Array of dishes", body = Vec<DishDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dishes(
    State(state): State<AppState>,
    Query(query): Query<DishQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.db);

    let dishes = service.get_all(query.title.as_deref().map(str::trim)).await?;
    let dishes: Vec<DishDto> = dishes.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dishes)))
}

/// Get a dish by ID.
///
/// # Returns
/// - `200 OK` - The dish with its ingredient IDs
/// - `404 Not Found` - Dish not found
#[utoipa::path(
    get,
    path = "/v1/dish/{dishId}",
    tag = DISH_TAG,
    params(
        ("dishId" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "The dish", body = DishDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.db);

    let dish = service.get_by_id(dish_id).await?;

    Ok((StatusCode::OK, Json(dish.into_dto())))
}

/// Update a dish.
///
/// The body must contain at least one field. Keeping the dish's own title is allowed.
///
/// # Access Control
/// - `manageDishes` - Cooks only
///
/// # Returns
/// - `200 OK` - The updated dish
/// - `400 Bad Request` - Empty or invalid body, or title used by another dish
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageDishes`
/// - `404 Not Found` - Dish not found
#[utoipa::path(
    patch,
    path = "/v1/dish/{dishId}",
    tag = DISH_TAG,
    params(
        ("dishId" = i32, Path, description = "Dish ID")
    ),
    request_body = UpdateDishDto,
    responses(
        (status = 200, description = "The updated dish", body = DishDto),
        (status = 400, description = "Invalid body or title already taken", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(dish_id): Path<i32>,
    payload: Result<Json<UpdateDishDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageDishes])
        .await?;
    let payload = validate_body(payload)?;

    let service = DishService::new(&state.db);
    let dish = service
        .update(dish_id, UpdateDishParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(dish.into_dto())))
}

/// Delete a dish.
///
/// # Access Control
/// - `manageDishes` - Cooks only
///
/// # Returns
/// - `204 No Content` - Dish deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageDishes`
/// - `404 Not Found` - Dish not found
#[utoipa::path(
    delete,
    path = "/v1/dish/{dishId}",
    tag = DISH_TAG,
    params(
        ("dishId" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 204, description = "Dish deleted"),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(dish_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageDishes])
        .await?;

    let service = DishService::new(&state.db);
    service.delete(dish_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
