mod common;

use foodgram::domain::entities::{NewIngredientAmount, NewRecipe};
use foodgram::domain::repositories::RecipeRepository;
use foodgram::error::AppError;
use foodgram::infrastructure::persistence::PgRecipeRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_recipe(tag_ids: Vec<i64>, ingredients: &[(i64, u32)]) -> NewRecipe {
    NewRecipe {
        name: "Syrniki".to_string(),
        text: "Fry until golden".to_string(),
        cooking_time: 25,
        tag_ids,
        ingredients: ingredients
            .iter()
            .map(|&(ingredient_id, amount)| NewIngredientAmount {
                ingredient_id,
                amount,
            })
            .collect(),
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let curd = common::create_test_ingredient(&pool, "curd", "g").await;
    let egg = common::create_test_ingredient(&pool, "egg", "pcs").await;
    let tag = common::create_test_tag(&pool, "breakfast").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let created = repo
        .create(author, new_recipe(vec![tag], &[(curd, 400), (egg, 2)]))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.author_id, author);
    assert_eq!(created.tag_ids, vec![tag]);
    assert_eq!(created.ingredients.len(), 2);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Syrniki");
    assert_eq!(found.cooking_time, 25);
    assert_eq!(found.ingredients, created.ingredients);
    assert_eq!(found.ingredients[0].ingredient_name, "curd");
    assert_eq!(found.ingredients[0].amount, 400);
}

#[sqlx::test]
async fn test_find_missing(pool: PgPool) {
    let repo = PgRecipeRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(123_456).await.unwrap().is_none());
    assert!(!repo.exists(123_456).await.unwrap());
}

#[sqlx::test]
async fn test_exists(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let id = common::create_test_recipe(&pool, author, "Soup", &[]).await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    assert!(repo.exists(id).await.unwrap());
}

#[sqlx::test]
async fn test_list_ingredient_lines_keeps_repeats(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let egg = common::create_test_ingredient(&pool, "egg", "pcs").await;
    let first = common::create_test_recipe(&pool, author, "Omelette", &[(egg, 2), (egg, 3)]).await;
    let second = common::create_test_recipe(&pool, author, "Cake", &[(egg, 4)]).await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let lines = repo
        .list_ingredient_lines(&[first, second, 999_999])
        .await
        .unwrap();

    let amounts: Vec<u32> = lines.iter().map(|l| l.amount).collect();
    assert_eq!(amounts, vec![2, 3, 4]);
    assert!(lines.iter().all(|l| l.ingredient_name == "egg"));
}

#[sqlx::test]
async fn test_list_ingredient_lines_empty(pool: PgPool) {
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let lines = repo.list_ingredient_lines(&[]).await.unwrap();

    assert!(lines.is_empty());
}

#[sqlx::test]
async fn test_missing_ingredients_and_tags(pool: PgPool) {
    let flour = common::create_test_ingredient(&pool, "flour", "g").await;
    let tag = common::create_test_tag(&pool, "dinner").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    assert_eq!(
        repo.missing_ingredients(&[flour, 777_777]).await.unwrap(),
        vec![777_777]
    );
    assert!(repo.missing_ingredients(&[flour]).await.unwrap().is_empty());
    assert_eq!(repo.missing_tags(&[888_888, tag]).await.unwrap(), vec![888_888]);
}

#[sqlx::test]
async fn test_create_with_vanished_ingredient_rolls_back(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let repo = PgRecipeRepository::new(Arc::new(pool.clone()));

    let result = repo.create(author, new_recipe(vec![], &[(424_242, 1)])).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recipes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgRecipeRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
async fn test_find_summary(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let id = common::create_test_recipe(&pool, author, "Kasha", &[]).await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let summary = repo.find_summary(id).await.unwrap().unwrap();

    assert_eq!(summary.id, id);
    assert_eq!(summary.author_id, author);
    assert_eq!(summary.name, "Kasha");
    assert_eq!(summary.cooking_time, 10);
    assert!(repo.find_summary(123_456).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_replaces_contents(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let curd = common::create_test_ingredient(&pool, "curd", "g").await;
    let egg = common::create_test_ingredient(&pool, "egg", "pcs").await;
    let breakfast = common::create_test_tag(&pool, "breakfast").await;
    let dessert = common::create_test_tag(&pool, "dessert").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let created = repo
        .create(author, new_recipe(vec![breakfast], &[(curd, 400), (egg, 2)]))
        .await
        .unwrap();

    let mut replacement = new_recipe(vec![dessert], &[(egg, 3)]);
    replacement.name = "Omelette".to_string();
    let updated = repo.update(created.id, replacement).await.unwrap().unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.author_id, author);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Omelette");
    assert_eq!(updated.tag_ids, vec![dessert]);
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(updated.ingredients[0].ingredient_name, "egg");
    assert_eq!(updated.ingredients[0].amount, 3);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.tag_ids, vec![dessert]);
    assert_eq!(found.ingredients, updated.ingredients);
}

#[sqlx::test]
async fn test_update_missing(pool: PgPool) {
    let egg = common::create_test_ingredient(&pool, "egg", "pcs").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let result = repo.update(123_456, new_recipe(vec![], &[(egg, 1)])).await;

    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_with_vanished_ingredient_rolls_back(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let egg = common::create_test_ingredient(&pool, "egg", "pcs").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let created = repo
        .create(author, new_recipe(vec![], &[(egg, 2)]))
        .await
        .unwrap();

    let result = repo
        .update(created.id, new_recipe(vec![], &[(424_242, 1)]))
        .await;
    assert!(matches!(result, Err(AppError::Validation { .. })));

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.ingredients.len(), 1);
    assert_eq!(found.ingredients[0].amount, 2);
}

#[sqlx::test]
async fn test_delete_cascades_to_cart(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let id = common::create_test_recipe(&pool, author, "Kasha", &[]).await;
    common::add_to_cart(&pool, author, id).await;
    let repo = PgRecipeRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(!repo.exists(id).await.unwrap());

    let in_cart = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shopping_cart")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(in_cart, 0);
}
