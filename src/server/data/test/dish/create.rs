use super::*;

/// Tests creating a dish starts with an empty ingredient list.
///
/// Expected: Ok(Dish) with the given fields and no ingredients
#[tokio::test]
async fn creates_dish_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;

    let dish = DishRepository::new(db)
        .create(CreateDishParams {
            title: "Lasagne".to_string(),
            subtitle: Some("Classic".to_string()),
            description: None,
            image_url: None,
            created_by_user_id: Some(cook.id),
        })
        .await?;

    assert_eq!(dish.title, "Lasagne");
    assert_eq!(dish.subtitle.as_deref(), Some("Classic"));
    assert!(dish.ingredients.is_empty());
    assert_eq!(dish.created_by_user_id, Some(cook.id));

    Ok(())
}

/// Tests appended ingredients come back in insertion order.
///
/// Expected: Ok with ingredient ids in the order they were appended
#[tokio::test]
async fn append_ingredient_preserves_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dish = factory::create_dish(db).await?;
    let repo = DishRepository::new(db);

    repo.append_ingredient(dish.id, 7).await?;
    repo.append_ingredient(dish.id, 3).await?;
    repo.append_ingredient(dish.id, 5).await?;

    let dish = repo.get_by_id(dish.id).await?.unwrap();

    assert_eq!(dish.ingredients, vec![7, 3, 5]);

    Ok(())
}
