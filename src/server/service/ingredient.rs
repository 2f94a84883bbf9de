//! Ingredient service for business logic.
//!
//! Creating an ingredient requires an existing dish and appends the new ingredient to
//! that dish's list. Updates and deletes never touch dish lists.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{dish::DishRepository, ingredient::IngredientRepository},
    error::AppError,
    model::ingredient::{
        CreateIngredientParams, Ingredient, IngredientWithDish, UpdateIngredientParams,
    },
    service::dish::DISH_NOT_FOUND,
};

pub const INGREDIENT_NOT_FOUND: &str = "Ingredient not found";
pub const INGREDIENT_TITLE_TAKEN: &str = "Ingredient title already taken";

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an ingredient and appends it to its dish.
    ///
    /// The title is checked before the dish.
    ///
    /// # Returns
    /// - `Ok(Ingredient)` - The created ingredient
    /// - `Err(AppError::BadRequest)` - Title already used by another ingredient
    /// - `Err(AppError::NotFound)` - Referenced dish does not exist
    pub async fn create(&self, params: CreateIngredientParams) -> Result<Ingredient, AppError> {
        let repo = IngredientRepository::new(self.db);
        let dish_repo = DishRepository::new(self.db);

        if repo.title_taken(&params.title, None).await? {
            return Err(AppError::BadRequest(INGREDIENT_TITLE_TAKEN.to_string()));
        }

        let dish_id = params.dish_id;
        if dish_repo.get_by_id(dish_id).await?.is_none() {
            return Err(AppError::NotFound(DISH_NOT_FOUND.to_string()));
        }

        let ingredient = repo.create(params).await?;
        dish_repo.append_ingredient(dish_id, ingredient.id).await?;

        Ok(ingredient)
    }

    pub async fn get_all(&self, title: Option<&str>) -> Result<Vec<Ingredient>, AppError> {
        let repo = IngredientRepository::new(self.db);

        Ok(repo.get_all(title).await?)
    }

    /// Retrieves an ingredient with its dish resolved.
    ///
    /// A dangling `dish_id` resolves to no dish rather than an error.
    pub async fn get_by_id(&self, id: i32) -> Result<IngredientWithDish, AppError> {
        let repo = IngredientRepository::new(self.db);

        let ingredient = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(INGREDIENT_NOT_FOUND.to_string()))?;

        let dish = match ingredient.dish_id {
            Some(dish_id) => DishRepository::new(self.db).get_by_id(dish_id).await?,
            None => None,
        };

        Ok(IngredientWithDish { ingredient, dish })
    }

    /// Updates an ingredient.
    ///
    /// # Returns
    /// - `Ok(Ingredient)` - The updated ingredient
    /// - `Err(AppError::NotFound)` - No ingredient with that ID, or new dish does not exist
    /// - `Err(AppError::BadRequest)` - Title already used by another ingredient
    pub async fn update(
        &self,
        id: i32,
        params: UpdateIngredientParams,
    ) -> Result<Ingredient, AppError> {
        let repo = IngredientRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(INGREDIENT_NOT_FOUND.to_string()));
        }

        if let Some(title) = &params.title {
            if repo.title_taken(title, Some(id)).await? {
                return Err(AppError::BadRequest(INGREDIENT_TITLE_TAKEN.to_string()));
            }
        }

        if let Some(dish_id) = params.dish_id {
            if DishRepository::new(self.db).get_by_id(dish_id).await?.is_none() {
                return Err(AppError::NotFound(DISH_NOT_FOUND.to_string()));
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(INGREDIENT_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = IngredientRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(INGREDIENT_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
