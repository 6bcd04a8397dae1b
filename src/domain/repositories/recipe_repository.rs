//! Repository trait for recipe data access.

use crate::domain::entities::{NewRecipe, Recipe};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recipes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecipeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Creates a recipe with its tag links and ingredient amounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced tag or ingredient
    /// does not exist, [`AppError::Internal`] on database errors.
    async fn create(&self, new_recipe: NewRecipe) -> Result<Recipe, AppError>;

    /// Finds a recipe by id, with author, tags, and ingredients attached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, AppError>;

    /// Cheap existence check used by short-link resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Lists recipes newest-first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Recipe>, AppError>;

    /// Counts all recipes, for pagination metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
