use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Dish, DishIngredient};
///
/// let test = TestBuilder::new()
///     .with_table(Dish)
///     .with_table(DishIngredient)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to authenticate requests: User and Token.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(Token)
    }

    /// Adds user tables plus Dish, Ingredient and the dish ingredient list.
    pub fn with_recipe_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Dish)
            .with_table(Ingredient)
            .with_table(DishIngredient)
    }

    /// Adds recipe tables plus Event, Participant and the event participant list.
    ///
    /// This is every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_recipe_tables()
            .with_table(Event)
            .with_table(Participant)
            .with_table(EventParticipant)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
