use super::*;

/// Tests pagination returns the requested page and the total across all pages.
///
/// Expected: Ok with 2 users on page 2 of 5 users at limit 3
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let (users, total) = UserRepository::new(db)
        .query(&UserQueryParams {
            limit: 3,
            page: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    Ok(())
}

/// Tests filtering by role only returns users with that role.
///
/// Expected: Ok with only the cook
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;
    factory::user::create_user(db).await?;
    factory::user::create_user_with_role(db, "admin").await?;

    let (users, total) = UserRepository::new(db)
        .query(&UserQueryParams {
            role: Some(Role::Cook),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].id, cook.id);

    Ok(())
}

/// Tests descending sort by name.
///
/// Expected: Ok with users ordered Carl, Bea, Anna
#[tokio::test]
async fn sorts_by_name_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Bea", "Anna", "Carl"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let (users, _) = UserRepository::new(db)
        .query(&UserQueryParams {
            sort: Some(UserSort {
                field: UserSortField::Name,
                descending: true,
            }),
            ..Default::default()
        })
        .await?;

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Carl", "Bea", "Anna"]);

    Ok(())
}
