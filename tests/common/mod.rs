#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use foodgram::application::services::auth_service::hash_token_with;
use foodgram::infrastructure::persistence::{
    PgCartRepository, PgRecipeRepository, PgTokenRepository,
};
use foodgram::routes::app_router;
use foodgram::state::AppState;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const BASE_URL: &str = "https://food.example.com";
pub const SIGNING_SECRET: &str = "test-signing-secret";

pub async fn create_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO users (username) VALUES ($1) RETURNING id")
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Issues an API token for `user_id` and returns the raw bearer value.
pub async fn create_test_token(pool: &PgPool, user_id: i64, token: &str) -> String {
    sqlx::query("INSERT INTO api_tokens (user_id, name, token_hash) VALUES ($1, 'test', $2)")
        .bind(user_id)
        .bind(hash_token_with(SIGNING_SECRET, token))
        .execute(pool)
        .await
        .unwrap();

    token.to_string()
}

pub async fn create_test_tag(pool: &PgPool, slug: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO tags (name, slug) VALUES ($1, $1) RETURNING id")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_ingredient(pool: &PgPool, name: &str, unit: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO ingredients (name, measurement_unit) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(unit)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a recipe with the given `(ingredient_id, amount)` lines.
pub async fn create_test_recipe(
    pool: &PgPool,
    author_id: i64,
    name: &str,
    lines: &[(i64, i32)],
) -> i64 {
    let recipe_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO recipes (author_id, name, text, cooking_time) VALUES ($1, $2, 'Cook it', 10) RETURNING id",
    )
    .bind(author_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap();

    for (ingredient_id, amount) in lines {
        sqlx::query(
            "INSERT INTO ingredient_amounts (recipe_id, ingredient_id, amount) VALUES ($1, $2, $3)",
        )
        .bind(recipe_id)
        .bind(ingredient_id)
        .bind(amount)
        .execute(pool)
        .await
        .unwrap();
    }

    recipe_id
}

pub async fn add_to_cart(pool: &PgPool, user_id: i64, recipe_id: i64) {
    sqlx::query("INSERT INTO shopping_cart (user_id, recipe_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(recipe_id)
        .execute(pool)
        .await
        .unwrap();
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    AppState::new(
        Arc::new(PgRecipeRepository::new(pool.clone())),
        Arc::new(PgCartRepository::new(pool.clone())),
        Arc::new(PgTokenRepository::new(pool)),
        BASE_URL,
        SIGNING_SECRET.to_string(),
    )
}

/// Inserts a fixed `ConnectInfo<SocketAddr>`, the extension the peer-IP
/// rate limiter keys on.
#[derive(Clone)]
pub struct TestPeerLayer;

impl<S> Layer<S> for TestPeerLayer {
    type Service = TestPeerService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TestPeerService { inner }
    }
}

#[derive(Clone)]
pub struct TestPeerService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for TestPeerService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Full application router as a client at a fixed peer address sees it.
pub fn create_test_server(pool: PgPool) -> TestServer {
    let app = app_router(create_test_state(pool), false).layer(TestPeerLayer);

    TestServer::new(app).unwrap()
}
