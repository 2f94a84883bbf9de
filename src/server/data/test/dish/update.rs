use super::*;

/// Tests updating a dish keeps its ingredient list and unset fields.
///
/// Expected: Ok(Some(Dish)) with the new title, old subtitle and same ingredients
#[tokio::test]
async fn updates_fields_and_keeps_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dish = factory::dish::DishFactory::new(db)
        .subtitle("Old subtitle")
        .build()
        .await?;
    let ingredient = factory::ingredient::IngredientFactory::new(db)
        .dish_id(dish.id)
        .build()
        .await?;
    factory::helpers::link_ingredient(db, dish.id, ingredient.id).await?;

    let updated = DishRepository::new(db)
        .update(
            dish.id,
            UpdateDishParams {
                title: Some("New title".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.subtitle.as_deref(), Some("Old subtitle"));
    assert_eq!(updated.ingredients, vec![ingredient.id]);
    assert!(updated.updated_at >= dish.updated_at);

    Ok(())
}

/// Tests updating a dish that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DishRepository::new(db)
        .update(999, UpdateDishParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
