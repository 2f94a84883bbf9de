use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(pk_auto(Dish::Id))
                    .col(string(Dish::Title))
                    .col(string_null(Dish::Subtitle))
                    .col(text_null(Dish::Description))
                    .col(string_null(Dish::ImageUrl))
                    .col(integer_null(Dish::CreatedByUserId))
                    .col(timestamp_with_time_zone(Dish::CreatedAt))
                    .col(timestamp_with_time_zone(Dish::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Lookup index only, title uniqueness is checked by the service before writes
        manager
            .create_index(
                Index::create()
                    .name("idx_dish_title")
                    .table(Dish::Table)
                    .col(Dish::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dish {
    Table,
    Id,
    Title,
    Subtitle,
    Description,
    ImageUrl,
    CreatedByUserId,
    CreatedAt,
    UpdatedAt,
}
