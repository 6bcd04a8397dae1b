//! PostgreSQL implementation of the ingredient repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Ingredient;
use crate::domain::repositories::IngredientRepository;
use crate::error::AppError;

/// PostgreSQL repository for the read-only ingredient catalog.
pub struct PgIngredientRepository {
    pool: Arc<PgPool>,
}

impl PgIngredientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientRepository for PgIngredientRepository {
    async fn list(&self) -> Result<Vec<Ingredient>, AppError> {
        let rows = sqlx::query_as::<_, IngredientRow>(
            "SELECT id, name, measurement_unit FROM ingredients ORDER BY name",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(IngredientRow::into_ingredient).collect())
    }

    async fn search_by_prefix(&self, name_prefix: &str) -> Result<Vec<Ingredient>, AppError> {
        // Escape LIKE metacharacters so a literal "%" in the search box
        // cannot widen the match.
        let mut pattern = String::with_capacity(name_prefix.len() + 1);
        for ch in name_prefix.chars() {
            if matches!(ch, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');

        let rows = sqlx::query_as::<_, IngredientRow>(
            r#"
            SELECT id, name, measurement_unit
            FROM ingredients
            WHERE name ILIKE $1
            ORDER BY name
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(IngredientRow::into_ingredient).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, AppError> {
        let row = sqlx::query_as::<_, IngredientRow>(
            "SELECT id, name, measurement_unit FROM ingredients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(IngredientRow::into_ingredient))
    }
}

#[derive(sqlx::FromRow)]
struct IngredientRow {
    id: i64,
    name: String,
    measurement_unit: String,
}

impl IngredientRow {
    fn into_ingredient(self) -> Ingredient {
        Ingredient {
            id: self.id,
            name: self.name,
            measurement_unit: self.measurement_unit,
        }
    }
}
