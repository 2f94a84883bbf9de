//! Ingredient domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::ingredient::{
        CreateIngredientDto, IngredientDetailDto, IngredientDto, UpdateIngredientDto,
    },
    server::model::{dish::Dish, trimmed, trimmed_opt},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    /// Owning dish. Not enforced, the dish may since have been deleted.
    pub dish_id: Option<i32>,
    pub created_by_user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn from_entity(entity: entity::ingredient::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            subtitle: entity.subtitle,
            image_url: entity.image_url,
            dish_id: entity.dish_id,
            created_by_user_id: entity.created_by_user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> IngredientDto {
        IngredientDto {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            image_url: self.image_url,
            dish_id: self.dish_id,
            created_by_user_id: self.created_by_user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Ingredient with its owning dish resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientWithDish {
    pub ingredient: Ingredient,
    pub dish: Option<Dish>,
}

impl IngredientWithDish {
    pub fn into_dto(self) -> IngredientDetailDto {
        let ingredient = self.ingredient;

        IngredientDetailDto {
            id: ingredient.id,
            title: ingredient.title,
            subtitle: ingredient.subtitle,
            image_url: ingredient.image_url,
            dish: self.dish.map(Dish::into_dto),
            created_by_user_id: ingredient.created_by_user_id,
            created_at: ingredient.created_at,
            updated_at: ingredient.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateIngredientParams {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub dish_id: i32,
    pub created_by_user_id: Option<i32>,
}

impl CreateIngredientParams {
    pub fn from_dto(dto: CreateIngredientDto, user_id: i32) -> Self {
        Self {
            title: trimmed(dto.title),
            subtitle: trimmed_opt(dto.subtitle),
            image_url: trimmed_opt(dto.image_url),
            dish_id: dto.dish_id,
            created_by_user_id: Some(user_id),
        }
    }
}

/// Fields to change on an ingredient. `None` leaves a field unchanged.
///
/// Changing `dish_id` does not touch any dish's ingredient list.
#[derive(Debug, Clone, Default)]
pub struct UpdateIngredientParams {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub dish_id: Option<i32>,
}

impl From<UpdateIngredientDto> for UpdateIngredientParams {
    fn from(dto: UpdateIngredientDto) -> Self {
        Self {
            title: trimmed_opt(dto.title),
            subtitle: trimmed_opt(dto.subtitle),
            image_url: trimmed_opt(dto.image_url),
            dish_id: dto.dish_id,
        }
    }
}
