use sea_orm::DatabaseConnection;

use crate::server::{data::reset::ResetRepository, error::AppError};

/// Empties the database for end-to-end test runs against a development server.
pub struct ResetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn reset(&self) -> Result<(), AppError> {
        let deleted = ResetRepository::new(self.db).delete_all().await?;

        tracing::warn!("Database reset, {} rows deleted", deleted);

        Ok(())
    }
}
