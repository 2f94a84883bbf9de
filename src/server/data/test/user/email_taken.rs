use super::*;

/// Tests that an email used by another user is reported as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_email_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let taken = UserRepository::new(db)
        .email_taken("taken@example.com", None)
        .await?;

    assert!(taken);

    Ok(())
}

/// Tests that a user keeping their own email is not a conflict.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("mine@example.com")
        .build()
        .await?;

    let taken = UserRepository::new(db)
        .email_taken("mine@example.com", Some(user.id))
        .await?;

    assert!(!taken);

    Ok(())
}
