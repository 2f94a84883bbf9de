use super::*;

/// Tests listing dishes loads each dish's own ingredient list.
///
/// Expected: Ok with two dishes, only the first holding the ingredient
#[tokio::test]
async fn get_all_loads_lists_per_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (dish, ingredient) = factory::helpers::create_dish_with_ingredient(db).await?;
    let other = factory::create_dish(db).await?;

    let dishes = DishRepository::new(db).get_all(None).await?;

    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0].id, dish.id);
    assert_eq!(dishes[0].ingredients, vec![ingredient.id]);
    assert_eq!(dishes[1].id, other.id);
    assert!(dishes[1].ingredients.is_empty());

    Ok(())
}

/// Tests the title filter is an exact match.
///
/// Expected: Ok with only the dish titled "Soup"
#[tokio::test]
async fn get_all_filters_by_exact_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::dish::DishFactory::new(db).title("Soup").build().await?;
    factory::dish::DishFactory::new(db)
        .title("Soup of the day")
        .build()
        .await?;

    let dishes = DishRepository::new(db).get_all(Some("Soup")).await?;

    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].title, "Soup");

    Ok(())
}

/// Tests getting an unknown dish.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_by_id_returns_none_for_missing_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dish = DishRepository::new(db).get_by_id(42).await?;

    assert!(dish.is_none());

    Ok(())
}

/// Tests the title uniqueness check ignores the dish being updated.
///
/// Expected: Ok(true) for other dishes, Ok(false) when excluding the owner
#[tokio::test]
async fn title_taken_respects_exclusion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dish = factory::dish::DishFactory::new(db).title("Curry").build().await?;
    let repo = DishRepository::new(db);

    assert!(repo.title_taken("Curry", None).await?);
    assert!(!repo.title_taken("Curry", Some(dish.id)).await?);
    assert!(!repo.title_taken("Stew", None).await?);

    Ok(())
}
