//! Repository trait for the ingredient catalog.

use crate::domain::entities::Ingredient;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only repository interface for ingredients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Lists the whole catalog ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Ingredient>, AppError>;

    /// Lists ingredients whose name starts with `name_prefix`
    /// (case-insensitive, as the search box expects), ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search_by_prefix(&self, name_prefix: &str) -> Result<Vec<Ingredient>, AppError>;

    /// Finds an ingredient by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, AppError>;
}
