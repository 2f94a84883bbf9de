use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a dish removes its ingredient list but not the ingredients.
///
/// Expected: Ok(true), no list rows left, ingredient still stored
#[tokio::test]
async fn removes_list_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (dish, ingredient) = factory::helpers::create_dish_with_ingredient(db).await?;

    let deleted = DishRepository::new(db).delete(dish.id).await?;

    assert!(deleted);
    assert_eq!(
        entity::prelude::DishIngredient::find().count(db).await?,
        0
    );
    assert!(entity::prelude::Ingredient::find_by_id(ingredient.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a dish that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = DishRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
