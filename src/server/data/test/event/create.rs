use super::*;

/// Tests creating an event stores the given invitation code and dates.
///
/// Expected: Ok(Event) with the code, dates and an empty participant list
#[tokio::test]
async fn creates_event_with_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2026, 5, 1, 18, 0, 0).unwrap();
    let end = start + Duration::hours(3);

    let event = EventRepository::new(db)
        .create(
            CreateEventParams {
                title: "Dinner".to_string(),
                subtitle: None,
                description: Some("Friday dinner".to_string()),
                start_date: Some(start),
                end_date: Some(end),
                dish_id: None,
                created_by_user_id: None,
            },
            "ABC123".to_string(),
        )
        .await?;

    assert_eq!(event.title, "Dinner");
    assert_eq!(event.invitation_code, "ABC123");
    assert_eq!(event.start_date, Some(start));
    assert_eq!(event.end_date, Some(end));
    assert!(event.participants.is_empty());

    Ok(())
}

/// Tests the invitation code check.
///
/// Expected: Ok(true) for a used code, Ok(false) otherwise
#[tokio::test]
async fn invitation_code_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event::EventFactory::new(db)
        .invitation_code("USED01")
        .build()
        .await?;

    let repo = EventRepository::new(db);

    assert!(repo.invitation_code_taken("USED01").await?);
    assert!(!repo.invitation_code_taken("FREE01").await?);

    Ok(())
}
