use super::*;

/// Tests creating an ingredient records the dish it belongs to.
///
/// Expected: Ok(Ingredient) with `dish_id` set
#[tokio::test]
async fn creates_ingredient_for_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dish = factory::create_dish(db).await?;

    let ingredient = IngredientRepository::new(db)
        .create(CreateIngredientParams {
            title: "Tomato".to_string(),
            subtitle: None,
            image_url: Some("/img/tomato.png".to_string()),
            dish_id: dish.id,
            created_by_user_id: None,
        })
        .await?;

    assert_eq!(ingredient.title, "Tomato");
    assert_eq!(ingredient.dish_id, Some(dish.id));
    assert_eq!(ingredient.image_url.as_deref(), Some("/img/tomato.png"));

    Ok(())
}

/// Tests listing ingredients filtered by title and unfiltered.
///
/// Expected: Ok with all ingredients in id order, and one for the filter
#[tokio::test]
async fn get_all_filters_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let salt = factory::ingredient::IngredientFactory::new(db)
        .title("Salt")
        .build()
        .await?;
    let pepper = factory::ingredient::IngredientFactory::new(db)
        .title("Pepper")
        .build()
        .await?;

    let repo = IngredientRepository::new(db);
    let all = repo.get_all(None).await?;
    let filtered = repo.get_all(Some("Pepper")).await?;

    assert_eq!(
        all.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![salt.id, pepper.id]
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, pepper.id);

    Ok(())
}
