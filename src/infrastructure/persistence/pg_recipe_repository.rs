//! PostgreSQL implementation of the recipe repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{IngredientLine, NewRecipe, Recipe, RecipeSummary};
use crate::domain::repositories::RecipeRepository;
use crate::error::AppError;

/// PostgreSQL repository for recipes and their ingredient lines.
pub struct PgRecipeRepository {
    pool: Arc<PgPool>,
}

impl PgRecipeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_tag_ids(&self, recipe_id: i64) -> Result<Vec<i64>, AppError> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT tag_id FROM recipe_tags WHERE recipe_id = $1 ORDER BY tag_id",
        )
        .bind(recipe_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(ids)
    }
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: i64,
    author_id: i64,
    name: String,
    text: String,
    cooking_time: i32,
    created_at: DateTime<Utc>,
}

impl RecipeRow {
    fn into_recipe(self, tag_ids: Vec<i64>, ingredients: Vec<IngredientLine>) -> Recipe {
        Recipe {
            id: self.id,
            author_id: self.author_id,
            name: self.name,
            text: self.text,
            cooking_time: self.cooking_time,
            tag_ids,
            ingredients,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RecipeSummaryRow {
    id: i64,
    author_id: i64,
    name: String,
    cooking_time: i32,
}

impl From<RecipeSummaryRow> for RecipeSummary {
    fn from(row: RecipeSummaryRow) -> Self {
        RecipeSummary {
            id: row.id,
            author_id: row.author_id,
            name: row.name,
            cooking_time: row.cooking_time,
        }
    }
}

#[derive(sqlx::FromRow)]
struct IngredientLineRow {
    recipe_id: i64,
    name: String,
    measurement_unit: String,
    amount: i32,
}

impl From<IngredientLineRow> for IngredientLine {
    fn from(row: IngredientLineRow) -> Self {
        // `amount > 0` is enforced by a CHECK constraint.
        IngredientLine::new(
            row.recipe_id,
            row.name,
            row.measurement_unit,
            row.amount.unsigned_abs(),
        )
    }
}

const SELECT_LINES: &str = r#"
    SELECT ia.recipe_id, i.name, i.measurement_unit, ia.amount
    FROM ingredient_amounts ia
    JOIN ingredients i ON i.id = ia.ingredient_id
    WHERE ia.recipe_id = ANY($1)
    ORDER BY ia.recipe_id, ia.id
"#;

/// Inserts tag links and ingredient lines of `recipe_id`, then reads the
/// lines back joined with the catalog.
async fn insert_children(
    conn: &mut PgConnection,
    recipe_id: i64,
    new_recipe: &NewRecipe,
) -> Result<Vec<IngredientLine>, AppError> {
    for tag_id in &new_recipe.tag_ids {
        sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id) VALUES ($1, $2)")
            .bind(recipe_id)
            .bind(tag_id)
            .execute(&mut *conn)
            .await?;
    }

    for line in &new_recipe.ingredients {
        let amount = i32::try_from(line.amount).map_err(|_| {
            AppError::bad_request(
                "Amount is too large",
                serde_json::json!({ "amount": line.amount }),
            )
        })?;

        sqlx::query(
            "INSERT INTO ingredient_amounts (recipe_id, ingredient_id, amount) VALUES ($1, $2, $3)",
        )
        .bind(recipe_id)
        .bind(line.ingredient_id)
        .bind(amount)
        .execute(&mut *conn)
        .await?;
    }

    let lines = sqlx::query_as::<_, IngredientLineRow>(SELECT_LINES)
        .bind(vec![recipe_id])
        .fetch_all(&mut *conn)
        .await?;

    Ok(lines.into_iter().map(IngredientLine::from).collect())
}

fn sorted(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, AppError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, author_id, name, text, cooking_time, created_at
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let tag_ids = self.load_tag_ids(id).await?;
        let ingredients = self.list_ingredient_lines(&[id]).await?;

        Ok(Some(row.into_recipe(tag_ids, ingredients)))
    }

    async fn find_summary(&self, id: i64) -> Result<Option<RecipeSummary>, AppError> {
        let summary = sqlx::query_as::<_, RecipeSummaryRow>(
            "SELECT id, author_id, name, cooking_time FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(summary.map(RecipeSummary::from))
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn list_ingredient_lines(
        &self,
        recipe_ids: &[i64],
    ) -> Result<Vec<IngredientLine>, AppError> {
        let rows = sqlx::query_as::<_, IngredientLineRow>(SELECT_LINES)
            .bind(recipe_ids)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(IngredientLine::from).collect())
    }

    async fn missing_ingredients(&self, ingredient_ids: &[i64]) -> Result<Vec<i64>, AppError> {
        let missing = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT requested.id
            FROM UNNEST($1::bigint[]) AS requested(id)
            LEFT JOIN ingredients i ON i.id = requested.id
            WHERE i.id IS NULL
            ORDER BY requested.id
            "#,
        )
        .bind(ingredient_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(missing)
    }

    async fn missing_tags(&self, tag_ids: &[i64]) -> Result<Vec<i64>, AppError> {
        let missing = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT requested.id
            FROM UNNEST($1::bigint[]) AS requested(id)
            LEFT JOIN tags t ON t.id = requested.id
            WHERE t.id IS NULL
            ORDER BY requested.id
            "#,
        )
        .bind(tag_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(missing)
    }

    async fn create(&self, author_id: i64, new_recipe: NewRecipe) -> Result<Recipe, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            INSERT INTO recipes (author_id, name, text, cooking_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id, author_id, name, text, cooking_time, created_at
            "#,
        )
        .bind(author_id)
        .bind(&new_recipe.name)
        .bind(&new_recipe.text)
        .bind(new_recipe.cooking_time)
        .fetch_one(&mut *tx)
        .await?;

        let lines = insert_children(&mut tx, row.id, &new_recipe).await?;

        tx.commit().await?;

        Ok(row.into_recipe(sorted(new_recipe.tag_ids), lines))
    }

    async fn update(&self, id: i64, new_recipe: NewRecipe) -> Result<Option<Recipe>, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            UPDATE recipes
            SET name = $2, text = $3, cooking_time = $4
            WHERE id = $1
            RETURNING id, author_id, name, text, cooking_time, created_at
            "#,
        )
        .bind(id)
        .bind(&new_recipe.name)
        .bind(&new_recipe.text)
        .bind(new_recipe.cooking_time)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM ingredient_amounts WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let lines = insert_children(&mut tx, id, &new_recipe).await?;

        tx.commit().await?;

        Ok(Some(row.into_recipe(sorted(new_recipe.tag_ids), lines)))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
