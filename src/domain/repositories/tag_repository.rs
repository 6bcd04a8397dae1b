//! Repository trait for the tag catalog.

use crate::domain::entities::Tag;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only repository interface for tags.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Lists all tags ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Tag>, AppError>;

    /// Finds a tag by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError>;
}
