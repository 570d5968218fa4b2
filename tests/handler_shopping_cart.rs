mod common;

use sqlx::PgPool;

#[sqlx::test]
async fn test_download_sums_across_recipes(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;

    let flour = common::create_test_ingredient(&pool, "flour", "g").await;
    let sugar = common::create_test_ingredient(&pool, "sugar", "g").await;
    let milk = common::create_test_ingredient(&pool, "milk", "ml").await;

    let pancakes =
        common::create_test_recipe(&pool, user, "Pancakes", &[(flour, 200), (milk, 300)]).await;
    let cake =
        common::create_test_recipe(&pool, user, "Cake", &[(flour, 300), (sugar, 100)]).await;
    common::add_to_cart(&pool, user, pancakes).await;
    common::add_to_cart(&pool, user, cake).await;

    let server = common::create_test_server(pool);

    let response = server
        .get("/api/recipes/download_shopping_cart")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"Shopping-list.txt\""
    );
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    assert_eq!(
        response.text(),
        "Shopping list\nflour 500 g\nmilk 300 ml\nsugar 100 g\n"
    );
}

#[sqlx::test]
async fn test_download_sums_repeated_lines_within_recipe(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;

    let egg = common::create_test_ingredient(&pool, "egg", "pcs").await;
    let omelette =
        common::create_test_recipe(&pool, user, "Omelette", &[(egg, 2), (egg, 3)]).await;
    common::add_to_cart(&pool, user, omelette).await;

    let server = common::create_test_server(pool);

    let response = server
        .get("/api/recipes/download_shopping_cart")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Shopping list\negg 5 pcs\n");
}

#[sqlx::test]
async fn test_download_keeps_units_apart(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;

    let sugar_g = common::create_test_ingredient(&pool, "sugar", "g").await;
    let sugar_tbsp = common::create_test_ingredient(&pool, "sugar", "tbsp").await;
    let tea =
        common::create_test_recipe(&pool, user, "Tea", &[(sugar_g, 10), (sugar_tbsp, 2)]).await;
    common::add_to_cart(&pool, user, tea).await;

    let server = common::create_test_server(pool);

    let response = server
        .get("/api/recipes/download_shopping_cart")
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.text(), "Shopping list\nsugar 10 g\nsugar 2 tbsp\n");
}

#[sqlx::test]
async fn test_download_does_not_overflow(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;

    let salt = common::create_test_ingredient(&pool, "salt", "g").await;
    let first = common::create_test_recipe(&pool, user, "Brine", &[(salt, i32::MAX)]).await;
    let second = common::create_test_recipe(&pool, user, "Pickles", &[(salt, i32::MAX)]).await;
    common::add_to_cart(&pool, user, first).await;
    common::add_to_cart(&pool, user, second).await;

    let server = common::create_test_server(pool);

    let response = server
        .get("/api/recipes/download_shopping_cart")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Shopping list\nsalt 4294967294 g\n");
}

#[sqlx::test]
async fn test_download_empty_cart(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;
    let server = common::create_test_server(pool);

    let response = server
        .get("/api/recipes/download_shopping_cart")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Shopping list\n");
}

#[sqlx::test]
async fn test_download_only_own_cart(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    let token = common::create_test_token(&pool, alice, "alice-token").await;

    let rice = common::create_test_ingredient(&pool, "rice", "g").await;
    let pilaf = common::create_test_recipe(&pool, bob, "Pilaf", &[(rice, 500)]).await;
    common::add_to_cart(&pool, bob, pilaf).await;

    let server = common::create_test_server(pool);

    let response = server
        .get("/api/recipes/download_shopping_cart")
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.text(), "Shopping list\n");
}

#[sqlx::test]
async fn test_download_requires_auth(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/api/recipes/download_shopping_cart").await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[sqlx::test]
async fn test_download_rejects_unknown_token(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .get("/api/recipes/download_shopping_cart")
        .authorization_bearer("not-a-token")
        .await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_add_to_cart(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;
    let recipe = common::create_test_recipe(&pool, user, "Soup", &[]).await;
    let server = common::create_test_server(pool);

    let response = server
        .post(&format!("/api/recipes/{recipe}/shopping_cart"))
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.status_code(), 201);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], recipe);
    assert_eq!(json["name"], "Soup");
    assert_eq!(json["cooking_time"], 10);
}

#[sqlx::test]
async fn test_add_to_cart_twice(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;
    let recipe = common::create_test_recipe(&pool, user, "Soup", &[]).await;
    let server = common::create_test_server(pool);

    let path = format!("/api/recipes/{recipe}/shopping_cart");
    server.post(&path).authorization_bearer(&token).await;
    let response = server.post(&path).authorization_bearer(&token).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_add_missing_recipe_to_cart(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/recipes/999999/shopping_cart")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_remove_from_cart(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;
    let recipe = common::create_test_recipe(&pool, user, "Soup", &[]).await;
    common::add_to_cart(&pool, user, recipe).await;
    let server = common::create_test_server(pool);

    let path = format!("/api/recipes/{recipe}/shopping_cart");
    let response = server.delete(&path).authorization_bearer(&token).await;
    assert_eq!(response.status_code(), 204);

    let response = server.delete(&path).authorization_bearer(&token).await;
    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_remove_then_download(pool: PgPool) {
    let user = common::create_test_user(&pool, "cook").await;
    let token = common::create_test_token(&pool, user, "cook-token").await;
    let oats = common::create_test_ingredient(&pool, "oats", "g").await;
    let porridge = common::create_test_recipe(&pool, user, "Porridge", &[(oats, 80)]).await;
    common::add_to_cart(&pool, user, porridge).await;
    let server = common::create_test_server(pool);

    server
        .delete(&format!("/api/recipes/{porridge}/shopping_cart"))
        .authorization_bearer(&token)
        .await;

    let response = server
        .get("/api/recipes/download_shopping_cart")
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.text(), "Shopping list\n");
}
