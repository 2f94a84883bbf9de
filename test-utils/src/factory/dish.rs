//! Dish factory for creating test dish records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dishes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let dish = DishFactory::new(&db).title("Pizza").created_by(cook.id).build().await?;
/// ```
pub struct DishFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    subtitle: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    created_by_user_id: Option<i32>,
}

impl<'a> DishFactory<'a> {
    /// Creates a new DishFactory with a unique `"Dish {id}"` title and no optional fields.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Dish {}", id),
            subtitle: None,
            description: None,
            image_url: None,
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

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by_user_id = Some(user_id);
        self
    }

    /// Builds and inserts the dish record.
    pub async fn build(self) -> Result<entity::dish::Model, DbErr> {
        let now = Utc::now();
        entity::dish::ActiveModel {
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(self.subtitle),
            description: ActiveValue::Set(self.description),
            image_url: ActiveValue::Set(self.image_url),
            created_by_user_id: ActiveValue::Set(self.created_by_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dish with default values.
pub async fn create_dish(db: &DatabaseConnection) -> Result<entity::dish::Model, DbErr> {
    DishFactory::new(db).build().await
}
