use super::*;

/// Tests deleting a participant removes it from every event list.
///
/// Expected: Ok(true) and both events lose the participant
#[tokio::test]
async fn removes_from_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_event(db).await?;
    let second = factory::create_event(db).await?;
    let leaving = factory::create_participant(db).await?;
    let staying = factory::create_participant(db).await?;
    factory::helpers::link_participant(db, first.id, leaving.id).await?;
    factory::helpers::link_participant(db, first.id, staying.id).await?;
    factory::helpers::link_participant(db, second.id, leaving.id).await?;

    let deleted = ParticipantRepository::new(db).delete(leaving.id).await?;

    let events = EventRepository::new(db);
    let first = events.get_by_id(first.id).await?.unwrap();
    let second = events.get_by_id(second.id).await?.unwrap();

    assert!(deleted);
    assert_eq!(first.participants, vec![staying.id]);
    assert!(second.participants.is_empty());

    Ok(())
}

/// Tests deleting a participant that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ParticipantRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
