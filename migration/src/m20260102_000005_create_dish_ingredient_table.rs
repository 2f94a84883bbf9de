use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DishIngredient::Table)
                    .if_not_exists()
                    .col(pk_auto(DishIngredient::Id))
                    .col(integer(DishIngredient::DishId))
                    .col(integer(DishIngredient::IngredientId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dish_ingredient_dish_id")
                    .table(DishIngredient::Table)
                    .col(DishIngredient::DishId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DishIngredient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DishIngredient {
    Table,
    Id,
    DishId,
    IngredientId,
}
