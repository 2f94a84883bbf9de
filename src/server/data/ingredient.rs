//! Ingredient data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::ingredient::{
    CreateIngredientParams, Ingredient, UpdateIngredientParams,
};

/// Repository providing database operations for ingredients.
///
/// Only the `ingredient` table is written here. Appending to a dish's ingredient list
/// is done through `DishRepository::append_ingredient`.
pub struct IngredientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new ingredient.
    ///
    /// # Returns
    /// - `Ok(Ingredient)` - The created ingredient
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateIngredientParams) -> Result<Ingredient, DbErr> {
        let now = Utc::now();
        let entity = entity::ingredient::ActiveModel {
            title: ActiveValue::Set(params.title),
            subtitle: ActiveValue::Set(params.subtitle),
            image_url: ActiveValue::Set(params.image_url),
            dish_id: ActiveValue::Set(Some(params.dish_id)),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ingredient::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Ingredient>, DbErr> {
        let entity = entity::prelude::Ingredient::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Ingredient::from_entity))
    }

    /// Gets all ingredients, optionally filtered by exact title, ordered by ID.
    pub async fn get_all(&self, title: Option<&str>) -> Result<Vec<Ingredient>, DbErr> {
        let mut query = entity::prelude::Ingredient::find();
        if let Some(title) = title {
            query = query.filter(entity::ingredient::Column::Title.eq(title));
        }

        let entities = query
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ingredient::from_entity).collect())
    }

    /// Checks whether a title is used by an ingredient other than `exclude_id`.
    pub async fn title_taken(&self, title: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Title.eq(title));
        if let Some(id) = exclude_id {
            query = query.filter(entity::ingredient::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies the set fields of `params` to an ingredient.
    ///
    /// # Returns
    /// - `Ok(Some(Ingredient))` - The updated ingredient
    /// - `Ok(None)` - No ingredient with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateIngredientParams,
    ) -> Result<Option<Ingredient>, DbErr> {
        let Some(entity) = entity::prelude::Ingredient::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::ingredient::ActiveModel = entity.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(subtitle) = params.subtitle {
            active.subtitle = ActiveValue::Set(Some(subtitle));
        }
        if let Some(image_url) = params.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(dish_id) = params.dish_id {
            active.dish_id = ActiveValue::Set(Some(dish_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Ingredient::from_entity(entity)))
    }

    /// Deletes an ingredient by ID.
    ///
    /// Dish ingredient lists keep referencing the deleted ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Ingredient::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
