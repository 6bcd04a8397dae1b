//! PostgreSQL implementation of the cart repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{CartEntry, RecipeRef, RelationKind, author_display_name};
use crate::domain::repositories::CartRepository;
use crate::error::AppError;

/// PostgreSQL repository for favorite/cart relations and cart snapshots.
///
/// Relation inserts and deletes share one code path: [`RelationKind::table`]
/// selects between the two identically shaped tables, so the SQL text never
/// interpolates request data.
pub struct PgCartRepository {
    pool: Arc<PgPool>,
}

impl PgCartRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for PgCartRepository {
    async fn cart_entries(&self, user_id: i64) -> Result<Vec<CartEntry>, AppError> {
        let rows = sqlx::query_as::<_, CartEntryRow>(
            r#"
            SELECT i.name AS ingredient_name,
                   i.measurement_unit AS unit,
                   ri.amount,
                   r.name AS recipe_name
            FROM shopping_cart sc
            JOIN recipes r ON r.id = sc.recipe_id
            JOIN recipe_ingredients ri ON ri.recipe_id = r.id
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE sc.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CartEntryRow::into_entry).collect())
    }

    async fn cart_recipes(&self, user_id: i64) -> Result<Vec<RecipeRef>, AppError> {
        let rows = sqlx::query_as::<_, CartRecipeRow>(
            r#"
            SELECT r.name, u.first_name, u.last_name, u.username
            FROM shopping_cart sc
            JOIN recipes r ON r.id = sc.recipe_id
            JOIN users u ON u.id = r.author_id
            WHERE sc.user_id = $1
            ORDER BY r.name
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CartRecipeRow::into_ref).collect())
    }

    async fn add_relation(
        &self,
        kind: RelationKind,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError> {
        let sql = format!(
            "INSERT INTO {} (user_id, recipe_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            kind.table()
        );

        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(recipe_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_relation(
        &self,
        kind: RelationKind,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE user_id = $1 AND recipe_id = $2",
            kind.table()
        );

        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(recipe_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(sqlx::FromRow)]
struct CartEntryRow {
    ingredient_name: String,
    unit: String,
    amount: i64,
    recipe_name: String,
}

impl CartEntryRow {
    fn into_entry(self) -> CartEntry {
        CartEntry {
            ingredient_name: self.ingredient_name,
            unit: self.unit,
            amount: self.amount,
            recipe_name: self.recipe_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CartRecipeRow {
    name: String,
    first_name: String,
    last_name: String,
    username: String,
}

impl CartRecipeRow {
    fn into_ref(self) -> RecipeRef {
        let author = author_display_name(&self.first_name, &self.last_name, &self.username);
        RecipeRef {
            name: self.name,
            author,
        }
    }
}
