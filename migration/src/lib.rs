pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_token_table;
mod m20260102_000003_create_dish_table;
mod m20260102_000004_create_ingredient_table;
mod m20260102_000005_create_dish_ingredient_table;
mod m20260103_000006_create_participant_table;
mod m20260103_000007_create_event_table;
mod m20260103_000008_create_event_participant_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_token_table::Migration),
            Box::new(m20260102_000003_create_dish_table::Migration),
            Box::new(m20260102_000004_create_ingredient_table::Migration),
            Box::new(m20260102_000005_create_dish_ingredient_table::Migration),
            Box::new(m20260103_000006_create_participant_table::Migration),
            Box::new(m20260103_000007_create_event_table::Migration),
            Box::new(m20260103_000008_create_event_participant_table::Migration),
        ]
    }
}
