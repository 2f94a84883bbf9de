use super::*;

/// Tests updating only the name leaves the email unchanged.
///
/// Expected: Ok(Some(User)) with the new name and old email
#[tokio::test]
async fn updates_set_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("keep@example.com")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, "keep@example.com");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, UpdateUserParams::default(), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests deleting a user reports whether a row was removed.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn delete_reports_rows_affected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);

    Ok(())
}
