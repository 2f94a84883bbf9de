use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::InvitationCode))
                    .col(string(Event::Title))
                    .col(string_null(Event::Subtitle))
                    .col(text_null(Event::Description))
                    .col(timestamp_with_time_zone_null(Event::StartDate))
                    .col(timestamp_with_time_zone_null(Event::EndDate))
                    .col(integer_null(Event::CreatedByUserId))
                    .col(integer_null(Event::DishId))
                    .col(timestamp_with_time_zone(Event::CreatedAt))
                    .col(timestamp_with_time_zone(Event::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_invitation_code")
                    .table(Event::Table)
                    .col(Event::InvitationCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    InvitationCode,
    Title,
    Subtitle,
    Description,
    StartDate,
    EndDate,
    CreatedByUserId,
    DishId,
    CreatedAt,
    UpdatedAt,
}
