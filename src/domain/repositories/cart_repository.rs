//! Repository trait for shopping-cart and favorite relations.

use crate::domain::entities::{CartEntry, RecipeRef, RelationKind};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user↔recipe relations and cart snapshots.
///
/// The two snapshot queries feed the shopping-list report. Each call returns
/// a fresh, internally consistent view of the user's cart; nothing is cached
/// between requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCartRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// All ingredient rows of the recipes currently in the user's cart,
    /// one row per `(recipe, ingredient)` pair. Amounts are positive by
    /// schema constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn cart_entries(&self, user_id: i64) -> Result<Vec<CartEntry>, AppError>;

    /// The distinct recipes in the user's cart with resolved author display
    /// names, one [`RecipeRef`] per recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn cart_recipes(&self, user_id: i64) -> Result<Vec<RecipeRef>, AppError>;

    /// Adds the relation, returning `false` if it already existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn add_relation(
        &self,
        kind: RelationKind,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError>;

    /// Removes the relation, returning `false` if it was absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove_relation(
        &self,
        kind: RelationKind,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError>;
}
