use super::*;

/// Tests detecting when an admin user exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "admin").await?;

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(result);

    Ok(())
}

/// Tests that cooks and participants do not count as admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_non_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "cook").await?;
    factory::user::create_user(db).await?;

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(!result);

    Ok(())
}
