//! PostgreSQL implementation of the cart repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::CartEntry;
use crate::domain::repositories::CartRepository;
use crate::error::AppError;

/// PostgreSQL repository for shopping cart membership.
///
/// The `(user_id, recipe_id)` primary key makes inserts idempotent.
pub struct PgCartRepository {
    pool: Arc<PgPool>,
}

impl PgCartRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CartEntryRow {
    user_id: i64,
    recipe_id: i64,
    added_at: DateTime<Utc>,
}

#[async_trait]
impl CartRepository for PgCartRepository {
    async fn list_entries(&self, user_id: i64) -> Result<Vec<CartEntry>, AppError> {
        let rows = sqlx::query_as::<_, CartEntryRow>(
            r#"
            SELECT user_id, recipe_id, added_at
            FROM shopping_cart
            WHERE user_id = $1
            ORDER BY added_at, recipe_id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CartEntry {
                user_id: r.user_id,
                recipe_id: r.recipe_id,
                added_at: r.added_at,
            })
            .collect())
    }

    async fn add(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO shopping_cart (user_id, recipe_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, recipe_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(recipe_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn remove(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM shopping_cart WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id)
            .bind(recipe_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
