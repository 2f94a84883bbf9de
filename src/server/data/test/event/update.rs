use super::*;

/// Tests updating an event keeps its invitation code and participants.
///
/// Expected: Ok(Some(Event)) with new title and dish, same code and participants
#[tokio::test]
async fn updates_fields_and_keeps_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dish = factory::create_dish(db).await?;
    let event = factory::create_event(db).await?;
    let participant = factory::create_participant(db).await?;
    factory::helpers::link_participant(db, event.id, participant.id).await?;

    let updated = EventRepository::new(db)
        .update(
            event.id,
            UpdateEventParams {
                title: Some("Renamed".to_string()),
                dish_id: Some(dish.id),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.dish_id, Some(dish.id));
    assert_eq!(updated.invitation_code, event.invitation_code);
    assert_eq!(updated.participants, vec![participant.id]);

    Ok(())
}

/// Tests updating an event that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventRepository::new(db)
        .update(999, UpdateEventParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
