use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingBearerToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingBearerToken))
    ));

    Ok(())
}

/// Tests a header using a scheme other than Bearer.
///
/// Expected: Err(AuthError::MissingBearerToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingBearerToken))
    ));

    Ok(())
}

/// Tests a bearer token that was never issued.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = bearer("not-a-real-token");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests an expired access token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::token::TokenFactory::new(db, user.id)
        .expires_in(Duration::minutes(-1))
        .build()
        .await?;

    let headers = bearer(&token.token);
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a refresh token presented as an access token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::token::TokenFactory::new(db, user.id)
        .refresh()
        .build()
        .await?;

    let headers = bearer(&token.token);
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests any valid access token passes when no rights are required.
///
/// Expected: Ok(User) for a participant
#[tokio::test]
async fn empty_rights_accept_any_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_access_token(db, user.id).await?;

    let headers = bearer(&token);
    let returned = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.role, Role::Participant);

    Ok(())
}

/// Tests a cook holds the dish management right.
///
/// Expected: Ok(User)
#[tokio::test]
async fn cook_may_manage_dishes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;
    let token = factory::create_access_token(db, cook.id).await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, &headers)
        .require(&[Right::ManageDishes, Right::ManageIngredients])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a participant lacks the dish management right.
///
/// Expected: Err(AuthError::AccessDenied) carrying the participant's id
#[tokio::test]
async fn participant_may_not_manage_dishes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_access_token(db, user.id).await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, &headers)
        .require(&[Right::ManageDishes])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a cook is denied user management.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn cook_may_not_manage_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;
    let token = factory::create_access_token(db, cook.id).await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, &headers)
        .require(&[Right::ManageUsers])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
