use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::model::{dish::DishDto, validation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDto {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub dish_id: Option<i32>,
    pub created_by_user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ingredient returned by `GET /v1/ingredient/{ingredientId}` with its dish resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDetailDto {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    /// `null` when the ingredient has no dish or the dish was deleted
    pub dish: Option<DishDto>,
    pub created_by_user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "title must not be empty"))]
    pub title: String,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "subtitle must not be empty"))]
    pub subtitle: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "imageUrl must not be empty"))]
    pub image_url: Option<String>,
    pub dish_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_ingredient"))]
pub struct UpdateIngredientDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "subtitle must not be empty"))]
    pub subtitle: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "imageUrl must not be empty"))]
    pub image_url: Option<String>,
    pub dish_id: Option<i32>,
}

fn validate_update_ingredient(dto: &UpdateIngredientDto) -> Result<(), ValidationError> {
    validation::at_least_one(&[
        dto.title.is_some(),
        dto.subtitle.is_some(),
        dto.image_url.is_some(),
        dto.dish_id.is_some(),
    ])
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngredientQueryDto {
    /// Exact title filter
    pub title: Option<String>,
}
