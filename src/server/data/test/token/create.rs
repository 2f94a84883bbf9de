use super::*;

/// Tests storing a refresh token for a user.
///
/// Expected: Ok(Token) with the given kind and expiry, not blacklisted
#[tokio::test]
async fn creates_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let expires_at = Utc::now() + Duration::days(30);

    let token = TokenRepository::new(db)
        .create(user.id, TokenKind::Refresh, "abc".to_string(), expires_at)
        .await?;

    assert_eq!(token.user_id, user.id);
    assert_eq!(token.kind, TokenKind::Refresh);
    assert_eq!(token.token, "abc");
    assert!(!token.blacklisted);
    assert!(token.is_usable(Utc::now()));

    Ok(())
}

/// Tests removing every token a user owns.
///
/// Expected: Ok(2) and no tokens left for the user
#[tokio::test]
async fn delete_by_user_removes_all_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let access = factory::token::TokenFactory::new(db, user.id).build().await?;
    factory::token::TokenFactory::new(db, user.id)
        .refresh()
        .build()
        .await?;
    let kept = factory::token::TokenFactory::new(db, other.id).build().await?;

    let repo = TokenRepository::new(db);
    let removed = repo.delete_by_user(user.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.find(&access.token, TokenKind::Access).await?.is_none());
    assert!(repo.find(&kept.token, TokenKind::Access).await?.is_some());

    Ok(())
}
