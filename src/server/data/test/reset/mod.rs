use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::reset::ResetRepository;

/// Tests wiping the database removes rows from every table.
///
/// Expected: Ok with every table empty afterwards
#[tokio::test]
async fn deletes_all_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_access_token(db, user.id).await?;
    factory::helpers::create_dish_with_ingredient(db).await?;
    let event = factory::create_event(db).await?;
    let participant = factory::create_participant(db).await?;
    factory::helpers::link_participant(db, event.id, participant.id).await?;

    let deleted = ResetRepository::new(db).delete_all().await?;

    assert_eq!(deleted, 8);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Token::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Dish::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Ingredient::find().count(db).await?, 0);
    assert_eq!(entity::prelude::DishIngredient::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Event::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Participant::find().count(db).await?, 0);
    assert_eq!(entity::prelude::EventParticipant::find().count(db).await?, 0);

    Ok(())
}
