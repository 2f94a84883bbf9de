use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Julia".to_string(),
        email: email.to_string(),
        password: "password1".to_string(),
        role: Role::Cook,
    }
}

/// Tests creating a user stores the given hash rather than the plain password.
///
/// Expected: Ok with the created user and the stored hash returned by email lookup
#[tokio::test]
async fn stores_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(&params("julia@example.com"), "$argon2id$stored".to_string())
        .await?;

    assert_eq!(user.name, "Julia");
    assert_eq!(user.role, Role::Cook);
    assert!(!user.is_email_verified);

    let (found, hash) = repo
        .find_with_password_by_email("julia@example.com")
        .await?
        .unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(hash, "$argon2id$stored");

    Ok(())
}

/// Tests the unique index on email rejects a second account.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(&params("dup@example.com"), "hash".to_string())
        .await?;
    let result = repo
        .create(&params("dup@example.com"), "hash".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking up an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a stored role outside the known set surfaces as a type error.
///
/// Expected: Err(DbErr::Type)
#[tokio::test]
async fn find_by_id_fails_on_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("chef")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(user.id).await;

    assert!(matches!(result, Err(DbErr::Type(_))));

    Ok(())
}
