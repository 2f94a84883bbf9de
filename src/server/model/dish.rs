//! Dish domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::dish::{CreateDishDto, DishDto, UpdateDishDto},
    server::model::{trimmed, trimmed_opt},
};

/// Dish with its ordered ingredient list.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Ingredient ids in insertion order. Entries may point at deleted ingredients.
    pub ingredients: Vec<i32>,
    pub created_by_user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dish {
    /// Converts an entity model plus its ingredient list rows into a dish.
    ///
    /// # Arguments
    /// - `entity` - The dish row
    /// - `ingredients` - Ingredient ids from `dish_ingredient`, already ordered
    pub fn from_entity(entity: entity::dish::Model, ingredients: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            subtitle: entity.subtitle,
            description: entity.description,
            image_url: entity.image_url,
            ingredients,
            created_by_user_id: entity.created_by_user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DishDto {
        DishDto {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            image_url: self.image_url,
            ingredients: self.ingredients,
            created_by_user_id: self.created_by_user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDishParams {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_by_user_id: Option<i32>,
}

impl CreateDishParams {
    /// Builds params from a request body, recording `user_id` as the creator.
    pub fn from_dto(dto: CreateDishDto, user_id: i32) -> Self {
        Self {
            title: trimmed(dto.title),
            subtitle: trimmed_opt(dto.subtitle),
            description: trimmed_opt(dto.description),
            image_url: trimmed_opt(dto.image_url),
            created_by_user_id: Some(user_id),
        }
    }
}

/// Fields to change on a dish. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDishParams {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<UpdateDishDto> for UpdateDishParams {
    fn from(dto: UpdateDishDto) -> Self {
        Self {
            title: trimmed_opt(dto.title),
            subtitle: trimmed_opt(dto.subtitle),
            description: trimmed_opt(dto.description),
            image_url: trimmed_opt(dto.image_url),
        }
    }
}
