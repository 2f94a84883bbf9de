use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting an event keeps its participants but drops the list rows.
///
/// Expected: Ok(true), participant still stored, no list rows
#[tokio::test]
async fn keeps_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let participant = factory::create_participant(db).await?;
    factory::helpers::link_participant(db, event.id, participant.id).await?;

    let deleted = EventRepository::new(db).delete(event.id).await?;

    assert!(deleted);
    assert_eq!(
        entity::prelude::EventParticipant::find().count(db).await?,
        0
    );
    assert!(entity::prelude::Participant::find_by_id(participant.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
