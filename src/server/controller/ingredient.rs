use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ingredient::{
            CreateIngredientDto, IngredientDetailDto, IngredientDto, IngredientQueryDto,
            UpdateIngredientDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::validate_body},
        model::{
            ingredient::{CreateIngredientParams, UpdateIngredientParams},
            role::Right,
        },
        service::ingredient::IngredientService,
        state::AppState,
    },
};

/// Tag for grouping ingredient endpoints in OpenAPI documentation
pub static INGREDIENT_TAG: &str = "ingredient";

/// Create an ingredient for an existing dish.
///
/// On success the ingredient's ID is appended to the dish's ingredient list.
///
/// # Access Control
/// - `manageIngredients` - Admins and cooks
///
/// # Returns
/// - `201 Created` - Successfully created ingredient
/// - `400 Bad Request` - Invalid body or title already taken
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageIngredients`
/// - `404 Not Found` - Dish not found
#[utoipa::path(
    post,
    path = "/v1/ingredient",
    tag = INGREDIENT_TAG,
    request_body = CreateIngredientDto,
    responses(
        (status = 201, description = "Successfully created ingredient", body = IngredientDto),
        (status = 400, description = "Invalid body or title already taken", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateIngredientDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageIngredients])
        .await?;
    let payload = validate_body(payload)?;

    let service = IngredientService::new(&state.db);
    let ingredient = service
        .create(CreateIngredientParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(ingredient.into_dto())))
}

/// List ingredients, optionally filtered by exact title. Public.
#[utoipa::path(
    get,
    path = "/v1/ingredient",
    tag = INGREDIENT_TAG,
    params(IngredientQueryDto),
    responses(
        (status = 200, description = "Array of ingredients", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    Query(query): Query<IngredientQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = IngredientService::new(&state.db);

    let ingredients = service
        .get_all(query.title.as_deref().map(str::trim))
        .await?;
    let ingredients: Vec<IngredientDto> = ingredients.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(ingredients)))
}

/// Get an ingredient by ID with its dish populated. Public.
///
/// # Returns
/// - `200 OK` - The ingredient, `dish` is `null` when the dish no longer exists
/// - `404 Not Found` - Ingredient not found
#[utoipa::path(
    get,
    path = "/v1/ingredient/{ingredientId}",
    tag = INGREDIENT_TAG,
    params(
        ("ingredientId" = i32, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 200, description = "The ingredient with its dish", body = IngredientDetailDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = IngredientService::new(&state.db);

    let ingredient = service.get_by_id(ingredient_id).await?;

    Ok((StatusCode::OK, Json(ingredient.into_dto())))
}

/// Update an ingredient.
///
/// # Access Control
/// - `manageIngredients` - Admins and cooks
///
/// # Returns
/// - `200 OK` - The updated ingredient
/// - `400 Bad Request` - Empty or invalid body, or title used by another ingredient
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageIngredients`
/// - `404 Not Found` - Ingredient or new dish not found
#[utoipa::path(
    patch,
    path = "/v1/ingredient/{ingredientId}",
    tag = INGREDIENT_TAG,
    params(
        ("ingredientId" = i32, Path, description = "Ingredient ID")
    ),
    request_body = UpdateIngredientDto,
    responses(
        (status = 200, description = "The updated ingredient", body = IngredientDto),
        (status = 400, description = "Invalid body or title already taken", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_ingredient(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ingredient_id): Path<i32>,
    payload: Result<Json<UpdateIngredientDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageIngredients])
        .await?;
    let payload = validate_body(payload)?;

    let service = IngredientService::new(&state.db);
    let ingredient = service
        .update(ingredient_id, UpdateIngredientParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(ingredient.into_dto())))
}

/// Delete an ingredient. Dish ingredient lists are left as they are.
///
/// # Access Control
/// - `manageIngredients` - Admins and cooks
#[utoipa::path(
    delete,
    path = "/v1/ingredient/{ingredientId}",
    tag = INGREDIENT_TAG,
    params(
        ("ingredientId" = i32, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ingredient_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageIngredients])
        .await?;

    let service = IngredientService::new(&state.db);
    service.delete(ingredient_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
