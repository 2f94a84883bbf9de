use super::*;

/// Tests a participant acting on their own record.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_self() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_access_token(db, user.id).await?;

    let headers = bearer(&token);
    let returned = AuthGuard::new(db, &headers)
        .require_or_self(&[Right::ManageUsers], user.id)
        .await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests a participant acting on someone else's record.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_user_without_right() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let token = factory::create_access_token(db, user.id).await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, &headers)
        .require_or_self(&[Right::ManageUsers], other.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin acting on another user's record.
///
/// Expected: Ok(User) for the admin
#[tokio::test]
async fn allows_admin_on_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let other = factory::create_user(db).await?;
    let token = factory::create_access_token(db, admin.id).await?;

    let headers = bearer(&token);
    let returned = AuthGuard::new(db, &headers)
        .require_or_self(&[Right::ManageUsers], other.id)
        .await?;

    assert_eq!(returned.id, admin.id);

    Ok(())
}
