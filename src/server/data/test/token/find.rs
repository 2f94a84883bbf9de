use super::*;

/// Tests that lookups are scoped to the token kind.
///
/// Expected: Ok(None) when searching a refresh token as an access token
#[tokio::test]
async fn does_not_match_other_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let refresh = factory::token::TokenFactory::new(db, user.id)
        .refresh()
        .build()
        .await?;

    let repo = TokenRepository::new(db);

    assert!(repo.find(&refresh.token, TokenKind::Access).await?.is_none());
    assert!(repo.find(&refresh.token, TokenKind::Refresh).await?.is_some());

    Ok(())
}

/// Tests that expired and blacklisted tokens are still found but not usable.
///
/// Expected: Ok(Some(Token)) with `is_usable` false for both
#[tokio::test]
async fn returns_unusable_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let expired = factory::token::TokenFactory::new(db, user.id)
        .expires_in(Duration::minutes(-5))
        .build()
        .await?;
    let blacklisted = factory::token::TokenFactory::new(db, user.id)
        .blacklisted(true)
        .build()
        .await?;

    let repo = TokenRepository::new(db);
    let now = Utc::now();

    let expired = repo.find(&expired.token, TokenKind::Access).await?.unwrap();
    let blacklisted = repo
        .find(&blacklisted.token, TokenKind::Access)
        .await?
        .unwrap();

    assert!(!expired.is_usable(now));
    assert!(!blacklisted.is_usable(now));

    Ok(())
}
