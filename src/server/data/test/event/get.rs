use super::*;

/// Tests finding an event by invitation code loads its participant list in order.
///
/// Expected: Ok(Some(Event)) with participants in join order
#[tokio::test]
async fn get_by_invitation_code_loads_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .invitation_code("JOINME")
        .build()
        .await?;
    let first = factory::create_participant(db).await?;
    let second = factory::create_participant(db).await?;
    factory::helpers::link_participant(db, event.id, second.id).await?;
    factory::helpers::link_participant(db, event.id, first.id).await?;

    let found = EventRepository::new(db)
        .get_by_invitation_code("JOINME")
        .await?
        .unwrap();

    assert_eq!(found.id, event.id);
    assert_eq!(found.participants, vec![second.id, first.id]);

    Ok(())
}

/// Tests an unknown invitation code.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_by_invitation_code_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = EventRepository::new(db)
        .get_by_invitation_code("NOPE00")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests listing events filtered by title.
///
/// Expected: Ok with the single matching event
#[tokio::test]
async fn get_all_filters_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event::EventFactory::new(db).title("Brunch").build().await?;
    factory::event::EventFactory::new(db).title("Supper").build().await?;

    let repo = EventRepository::new(db);

    assert_eq!(repo.get_all(None).await?.len(), 2);
    let brunch = repo.get_all(Some("Brunch")).await?;
    assert_eq!(brunch.len(), 1);
    assert_eq!(brunch[0].title, "Brunch");

    Ok(())
}
