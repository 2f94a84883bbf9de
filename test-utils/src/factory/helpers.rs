//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating records
//! together with the records they reference.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::{dish::DishFactory, ingredient::IngredientFactory};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Appends an ingredient id to a dish's ingredient list.
///
/// # Arguments
/// - `db` - Database connection
/// - `dish_id` - Dish owning the list
/// - `ingredient_id` - Ingredient to append
///
/// # Returns
/// - `Ok(entity::dish_ingredient::Model)` - The created list entry
/// - `Err(DbErr)` - Database error during insert
pub async fn link_ingredient(
    db: &DatabaseConnection,
    dish_id: i32,
    ingredient_id: i32,
) -> Result<entity::dish_ingredient::Model, DbErr> {
    entity::dish_ingredient::ActiveModel {
        dish_id: ActiveValue::Set(dish_id),
        ingredient_id: ActiveValue::Set(ingredient_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Appends a participant id to an event's participant list.
pub async fn link_participant(
    db: &DatabaseConnection,
    event_id: i32,
    participant_id: i32,
) -> Result<entity::event_participant::Model, DbErr> {
    entity::event_participant::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        participant_id: ActiveValue::Set(participant_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a dish with a single ingredient already on its ingredient list.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((dish, ingredient))` - The created dish and its ingredient
/// - `Err(DbErr)` - Database error during any insert
pub async fn create_dish_with_ingredient(
    db: &DatabaseConnection,
) -> Result<(entity::dish::Model, entity::ingredient::Model), DbErr> {
    let dish = DishFactory::new(db).build().await?;
    let ingredient = IngredientFactory::new(db).dish_id(dish.id).build().await?;
    link_ingredient(db, dish.id, ingredient.id).await?;

    Ok((dish, ingredient))
}
