use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::model::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishDto {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Ingredient ids in the order they were added
    pub ingredients: Vec<i32>,
    pub created_by_user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "title must not be empty"))]
    pub title: String,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "subtitle must not be empty"))]
    pub subtitle: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "imageUrl must not be empty"))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_dish"))]
pub struct UpdateDishDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "subtitle must not be empty"))]
    pub subtitle: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "imageUrl must not be empty"))]
    pub image_url: Option<String>,
}

fn validate_update_dish(dto: &UpdateDishDto) -> Result<(), ValidationError> {
    validation::at_least_one(&[
        dto.title.is_some(),
        dto.subtitle.is_some(),
        dto.description.is_some(),
        dto.image_url.is_some(),
    ])
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DishQueryDto {
    /// Exact title filter
    pub title: Option<String>,
}
