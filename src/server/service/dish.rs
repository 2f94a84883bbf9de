//! Dish service for business logic.
//!
//! Enforces title uniqueness across dishes and turns missing dishes into
//! `Dish not found` errors.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::dish::DishRepository,
    error::AppError,
    model::dish::{CreateDishParams, Dish, UpdateDishParams},
};

pub const DISH_NOT_FOUND: &str = "Dish not found";
pub const DISH_TITLE_TAKEN: &str = "Dish title already taken";

pub struct DishService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a dish after checking that its title is free.
    ///
    /// # Returns
    /// - `Ok(Dish)` - The created dish with an empty ingredient list
    /// - `Err(AppError::BadRequest)` - Title already used by another dish
    pub async fn create(&self, params: CreateDishParams) -> Result<Dish, AppError> {
        let repo = DishRepository::new(self.db);

        if repo.title_taken(&params.title, None).await? {
            return Err(AppError::BadRequest(DISH_TITLE_TAKEN.to_string()));
        }

        Ok(repo.create(params).await?)
    }

    /// Lists dishes, optionally only the one with an exact title.
    pub async fn get_all(&self, title: Option<&str>) -> Result<Vec<Dish>, AppError> {
        let repo = DishRepository::new(self.db);

        Ok(repo.get_all(title).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Dish, AppError> {
        let repo = DishRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(DISH_NOT_FOUND.to_string()))
    }

    /// Updates a dish.
    ///
    /// Keeping the dish's own title passes the uniqueness check.
    ///
    /// # Returns
    /// - `Ok(Dish)` - The updated dish
    /// - `Err(AppError::NotFound)` - No dish with that ID
    /// - `Err(AppError::BadRequest)` - Title already used by another dish
    pub async fn update(&self, id: i32, params: UpdateDishParams) -> Result<Dish, AppError> {
        let repo = DishRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(DISH_NOT_FOUND.to_string()));
        }

        if let Some(title) = &params.title {
            if repo.title_taken(title, Some(id)).await? {
                return Err(AppError::BadRequest(DISH_TITLE_TAKEN.to_string()));
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(DISH_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DishRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(DISH_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
