//! PostgreSQL implementation of the recipe repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRecipe, Recipe, RecipeIngredient, Tag, User};
use crate::domain::repositories::RecipeRepository;
use crate::error::AppError;

/// PostgreSQL repository for recipe storage and retrieval.
pub struct PgRecipeRepository {
    pool: Arc<PgPool>,
}

impl PgRecipeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Loads tags and ingredient amounts for one recipe row.
    async fn attach_details(&self, row: RecipeRow) -> Result<Recipe, AppError> {
        let tags = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT t.id, t.name, t.slug
            FROM recipe_tags rt
            JOIN tags t ON t.id = rt.tag_id
            WHERE rt.recipe_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(row.id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let ingredients = sqlx::query_as::<_, RecipeIngredientRow>(
            r#"
            SELECT ri.ingredient_id, i.name, i.measurement_unit, ri.amount
            FROM recipe_ingredients ri
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE ri.recipe_id = $1
            ORDER BY i.name
            "#,
        )
        .bind(row.id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(row.into_recipe(
            tags.into_iter().map(TagRow::into_tag).collect(),
            ingredients
                .into_iter()
                .map(RecipeIngredientRow::into_entity)
                .collect(),
        ))
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn create(&self, new_recipe: NewRecipe) -> Result<Recipe, AppError> {
        let mut tx = self.pool.begin().await?;

        let recipe_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO recipes (author_id, name, text, cooking_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(new_recipe.author_id)
        .bind(&new_recipe.name)
        .bind(&new_recipe.text)
        .bind(new_recipe.cooking_time)
        .fetch_one(&mut *tx)
        .await?;

        for tag_id in &new_recipe.tag_ids {
            sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id) VALUES ($1, $2)")
                .bind(recipe_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        for item in &new_recipe.ingredients {
            sqlx::query(
                r#"
                INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(recipe_id)
            .bind(item.ingredient_id)
            .bind(item.amount)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.find_by_id(recipe_id).await?.ok_or_else(|| {
            AppError::internal(
                "Recipe disappeared after insert",
                serde_json::json!({ "id": recipe_id }),
            )
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, AppError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.name, r.text, r.cooking_time, r.created_at,
                   u.id AS author_id, u.email, u.username, u.first_name, u.last_name
            FROM recipes r
            JOIN users u ON u.id = r.author_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => Ok(Some(self.attach_details(row).await?)),
            None => Ok(None),
        }
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(found.is_some())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Recipe>, AppError> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.name, r.text, r.cooking_time, r.created_at,
                   u.id AS author_id, u.email, u.username, u.first_name, u.last_name
            FROM recipes r
            JOIN users u ON u.id = r.author_id
            ORDER BY r.created_at DESC, r.name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut recipes = Vec::with_capacity(rows.len());
        for row in rows {
            recipes.push(self.attach_details(row).await?);
        }
        Ok(recipes)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: i64,
    name: String,
    text: String,
    cooking_time: i32,
    created_at: DateTime<Utc>,
    author_id: i64,
    email: String,
    username: String,
    first_name: String,
    last_name: String,
}

impl RecipeRow {
    fn into_recipe(self, tags: Vec<Tag>, ingredients: Vec<RecipeIngredient>) -> Recipe {
        Recipe {
            id: self.id,
            author: User {
                id: self.author_id,
                email: self.email,
                username: self.username,
                first_name: self.first_name,
                last_name: self.last_name,
            },
            name: self.name,
            text: self.text,
            cooking_time: self.cooking_time,
            tags,
            ingredients,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
}

impl TagRow {
    fn into_tag(self) -> Tag {
        Tag {
            id: self.id,
            name: self.name,
            slug: self.slug,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RecipeIngredientRow {
    ingredient_id: i64,
    name: String,
    measurement_unit: String,
    amount: i64,
}

impl RecipeIngredientRow {
    fn into_entity(self) -> RecipeIngredient {
        RecipeIngredient {
            ingredient_id: self.ingredient_id,
            name: self.name,
            measurement_unit: self.measurement_unit,
            amount: self.amount,
        }
    }
}
