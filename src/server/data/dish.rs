//! Dish data repository for database operations.
//!
//! This module provides the `DishRepository` for managing dish records and their ordered
//! ingredient lists. The list lives in `dish_ingredient` rows, one per appended ingredient,
//! ordered by row ID.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::dish::{CreateDishParams, Dish, UpdateDishParams};

/// Repository providing database operations for dishes.
pub struct DishRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishRepository<'a> {
    /// Creates a new DishRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DishRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new dish with an empty ingredient list.
    ///
    /// # Arguments
    /// - `params` - Trimmed dish fields and creator
    ///
    /// # Returns
    /// - `Ok(Dish)` - The created dish
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateDishParams) -> Result<Dish, DbErr> {
        let now = Utc::now();
        let entity = entity::dish::ActiveModel {
            title: ActiveValue::Set(params.title),
            subtitle: ActiveValue::Set(params.subtitle),
            description: ActiveValue::Set(params.description),
            image_url: ActiveValue::Set(params.image_url),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dish::from_entity(entity, Vec::new()))
    }

    /// Gets a dish by ID with its ingredient list.
    ///
    /// # Returns
    /// - `Ok(Some(Dish))` - Dish found
    /// - `Ok(None)` - No dish with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Dish>, DbErr> {
        let Some(entity) = entity::prelude::Dish::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut lists = self.ingredient_lists(&[id]).await?;
        let ingredients = lists.remove(&id).unwrap_or_default();

        Ok(Some(Dish::from_entity(entity, ingredients)))
    }

    /// Gets all dishes, optionally filtered by exact title, ordered by ID.
    ///
    /// Ingredient lists for all returned dishes are loaded with a single query.
    pub async fn get_all(&self, title: Option<&str>) -> Result<Vec<Dish>, DbErr> {
        let mut query = entity::prelude::Dish::find();
        if let Some(title) = title {
            query = query.filter(entity::dish::Column::Title.eq(title));
        }

        let entities = query
            .order_by_asc(entity::dish::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|d| d.id).collect();
        let mut lists = self.ingredient_lists(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let ingredients = lists.remove(&entity.id).unwrap_or_default();
                Dish::from_entity(entity, ingredients)
            })
            .collect())
    }

    /// Checks whether a title is used by a dish other than `exclude_id`.
    ///
    /// # Arguments
    /// - `title` - Trimmed title to look up
    /// - `exclude_id` - Dish being updated, ignored by the check
    ///
    /// # Returns
    /// - `Ok(true)` - Another dish already uses this title
    /// - `Ok(false)` - Title is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn title_taken(&self, title: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Dish::find().filter(entity::dish::Column::Title.eq(title));
        if let Some(id) = exclude_id {
            query = query.filter(entity::dish::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies the set fields of `params` to a dish.
    ///
    /// # Returns
    /// - `Ok(Some(Dish))` - The updated dish with its ingredient list
    /// - `Ok(None)` - No dish with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateDishParams) -> Result<Option<Dish>, DbErr> {
        let Some(entity) = entity::prelude::Dish::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::dish::ActiveModel = entity.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(subtitle) = params.subtitle {
            active.subtitle = ActiveValue::Set(Some(subtitle));
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(image_url) = params.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        let mut lists = self.ingredient_lists(&[id]).await?;
        let ingredients = lists.remove(&id).unwrap_or_default();

        Ok(Some(Dish::from_entity(entity, ingredients)))
    }

    /// Deletes a dish and its ingredient list rows.
    ///
    /// Ingredients themselves are left untouched, including their `dish_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Dish deleted
    /// - `Ok(false)` - No dish with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Dish::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        entity::prelude::DishIngredient::delete_many()
            .filter(entity::dish_ingredient::Column::DishId.eq(id))
            .exec(self.db)
            .await?;

        Ok(true)
    }

    /// Appends an ingredient to the end of a dish's ingredient list.
    pub async fn append_ingredient(&self, dish_id: i32, ingredient_id: i32) -> Result<(), DbErr> {
        entity::dish_ingredient::ActiveModel {
            dish_id: ActiveValue::Set(dish_id),
            ingredient_id: ActiveValue::Set(ingredient_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Loads the ingredient lists of the given dishes keyed by dish ID.
    async fn ingredient_lists(&self, dish_ids: &[i32]) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if dish_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::DishIngredient::find()
            .filter(entity::dish_ingredient::Column::DishId.is_in(dish_ids.to_vec()))
            .order_by_asc(entity::dish_ingredient::Column::Id)
            .all(self.db)
            .await?;

        let mut lists: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            lists.entry(row.dish_id).or_default().push(row.ingredient_id);
        }

        Ok(lists)
    }
}
