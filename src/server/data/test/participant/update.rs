use super::*;

/// Tests updating a participant's avatar only.
///
/// Expected: Ok(Some(Participant)) with the new avatar and old username
#[tokio::test]
async fn updates_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let participant = factory::participant::ParticipantFactory::new(db)
        .username("guest")
        .build()
        .await?;

    let updated = ParticipantRepository::new(db)
        .update(
            participant.id,
            UpdateParticipantParams {
                avatar_path: Some("/avatars/1.png".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "guest");
    assert_eq!(updated.avatar_path.as_deref(), Some("/avatars/1.png"));

    Ok(())
}
