use super::*;

/// Tests creating a participant that joined with an invitation code.
///
/// Expected: Ok(Participant) carrying the code
#[tokio::test]
async fn creates_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let participant = ParticipantRepository::new(db)
        .create(CreateParticipantParams {
            username: "guest".to_string(),
            avatar_path: None,
            invitation_code: Some("ABC123".to_string()),
        })
        .await?;

    assert_eq!(participant.username, "guest");
    assert_eq!(participant.invitation_code.as_deref(), Some("ABC123"));

    Ok(())
}

/// Tests filtering participants by invitation code.
///
/// Expected: Ok with only the participants holding that code
#[tokio::test]
async fn get_all_filters_by_invitation_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::participant::ParticipantFactory::new(db)
        .invitation_code("PARTY1")
        .build()
        .await?;
    factory::participant::ParticipantFactory::new(db)
        .invitation_code("OTHER1")
        .build()
        .await?;
    factory::create_participant(db).await?;

    let repo = ParticipantRepository::new(db);
    let filtered = repo.get_all(Some("PARTY1")).await?;

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, guest.id);
    assert_eq!(repo.get_all(None).await?.len(), 3);

    Ok(())
}
