//! Ingredient factory for creating test ingredient records.
//!
//! The factory only writes the ingredient row. Use `helpers::link_ingredient` or
//! `helpers::create_dish_with_ingredient` when the dish's ingredient list matters.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct IngredientFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    subtitle: Option<String>,
    image_url: Option<String>,
    dish_id: Option<i32>,
    created_by_user_id: Option<i32>,
}

impl<'a> IngredientFactory<'a> {
    /// Creates a new IngredientFactory with a unique `"Ingredient {id}"` title.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Ingredient {}", id),
            subtitle: None,
            image_url: None,
            dish_id: None,
            created_by_user_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn dish_id(mut self, dish_id: i32) -> Self {
        self.dish_id = Some(dish_id);
        self
    }

    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by_user_id = Some(user_id);
        self
    }

    /// Builds and inserts the ingredient record.
    pub async fn build(self) -> Result<entity::ingredient::Model, DbErr> {
        let now = Utc::now();
        entity::ingredient::ActiveModel {
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(self.subtitle),
            image_url: ActiveValue::Set(self.image_url),
            dish_id: ActiveValue::Set(self.dish_id),
            created_by_user_id: ActiveValue::Set(self.created_by_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unlinked ingredient with default values.
pub async fn create_ingredient(db: &DatabaseConnection) -> Result<entity::ingredient::Model, DbErr> {
    IngredientFactory::new(db).build().await
}
