//! Wipes every table. Only reachable through the development reset route.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct ResetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes all rows from all tables, link tables first.
    ///
    /// # Returns
    /// - `Ok(u64)` - Total number of deleted rows
    /// - `Err(DbErr)` - Database error during any delete
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let mut deleted = 0;

        deleted += entity::prelude::DishIngredient::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;
        deleted += entity::prelude::EventParticipant::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;
        deleted += entity::prelude::Token::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;
        deleted += entity::prelude::Participant::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;
        deleted += entity::prelude::Event::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;
        deleted += entity::prelude::Ingredient::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;
        deleted += entity::prelude::Dish::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;
        deleted += entity::prelude::User::delete_many()
            .exec(self.db)
            .await?
            .rows_affected;

        Ok(deleted)
    }
}
