mod common;

use foodgram::domain::repositories::CartRepository;
use foodgram::infrastructure::persistence::PgCartRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_add_is_idempotent(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let recipe = common::create_test_recipe(&pool, user, "Soup", &[]).await;
    let repo = PgCartRepository::new(Arc::new(pool));

    assert!(repo.add(user, recipe).await.unwrap());
    assert!(!repo.add(user, recipe).await.unwrap());

    let entries = repo.list_entries(user).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].recipe_id, recipe);
}

#[sqlx::test]
async fn test_remove(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let recipe = common::create_test_recipe(&pool, user, "Soup", &[]).await;
    let repo = PgCartRepository::new(Arc::new(pool));

    repo.add(user, recipe).await.unwrap();

    assert!(repo.remove(user, recipe).await.unwrap());
    assert!(!repo.remove(user, recipe).await.unwrap());
    assert!(repo.list_entries(user).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_carts_are_per_user(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    let recipe = common::create_test_recipe(&pool, alice, "Soup", &[]).await;
    let repo = PgCartRepository::new(Arc::new(pool));

    repo.add(alice, recipe).await.unwrap();

    assert_eq!(repo.list_entries(alice).await.unwrap().len(), 1);
    assert!(repo.list_entries(bob).await.unwrap().is_empty());
}
