use super::*;

/// Tests moving an ingredient to another dish.
///
/// Expected: Ok(Some(Ingredient)) with the new `dish_id`
#[tokio::test]
async fn updates_dish_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, ingredient) = factory::helpers::create_dish_with_ingredient(db).await?;
    let other = factory::create_dish(db).await?;

    let updated = IngredientRepository::new(db)
        .update(
            ingredient.id,
            UpdateIngredientParams {
                dish_id: Some(other.id),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.dish_id, Some(other.id));
    assert_eq!(updated.title, ingredient.title);

    Ok(())
}

/// Tests deleting an ingredient twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn delete_reports_rows_affected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ingredient = factory::create_ingredient(db).await?;
    let repo = IngredientRepository::new(db);

    assert!(repo.delete(ingredient.id).await?);
    assert!(!repo.delete(ingredient.id).await?);

    Ok(())
}
