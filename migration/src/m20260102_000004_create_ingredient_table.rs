use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredient::Id))
                    .col(string(Ingredient::Title))
                    .col(string_null(Ingredient::Subtitle))
                    .col(string_null(Ingredient::ImageUrl))
                    .col(integer_null(Ingredient::DishId))
                    .col(integer_null(Ingredient::CreatedByUserId))
                    .col(timestamp_with_time_zone(Ingredient::CreatedAt))
                    .col(timestamp_with_time_zone(Ingredient::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ingredient_title")
                    .table(Ingredient::Table)
                    .col(Ingredient::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ingredient {
    Table,
    Id,
    Title,
    Subtitle,
    ImageUrl,
    DishId,
    CreatedByUserId,
    CreatedAt,
    UpdatedAt,
}
