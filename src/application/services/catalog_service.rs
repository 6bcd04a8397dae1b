//! Tag and ingredient catalog service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Ingredient, Tag};
use crate::domain::repositories::{IngredientRepository, TagRepository};
use crate::error::AppError;

/// Read-only service over the tag and ingredient catalogs.
pub struct CatalogService<I: IngredientRepository, T: TagRepository> {
    ingredient_repository: Arc<I>,
    tag_repository: Arc<T>,
}

impl<I: IngredientRepository, T: TagRepository> CatalogService<I, T> {
    /// Creates a new catalog service.
    pub fn new(ingredient_repository: Arc<I>, tag_repository: Arc<T>) -> Self {
        Self {
            ingredient_repository,
            tag_repository,
        }
    }

    /// Lists all tags.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        self.tag_repository.list().await
    }

    /// Retrieves a tag by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no tag matches the id.
    pub async fn get_tag(&self, id: i64) -> Result<Tag, AppError> {
        self.tag_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tag not found", json!({ "id": id })))
    }

    /// Lists ingredients, optionally filtered by a name prefix.
    ///
    /// An empty prefix is treated as no filter.
    pub async fn list_ingredients(
        &self,
        name_prefix: Option<&str>,
    ) -> Result<Vec<Ingredient>, AppError> {
        match name_prefix {
            Some(prefix) if !prefix.is_empty() => {
                self.ingredient_repository.search_by_prefix(prefix).await
            }
            _ => self.ingredient_repository.list().await,
        }
    }

    /// Retrieves an ingredient by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no ingredient matches the id.
    pub async fn get_ingredient(&self, id: i64) -> Result<Ingredient, AppError> {
        self.ingredient_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ingredient not found", json!({ "id": id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockIngredientRepository, MockTagRepository};

    #[tokio::test]
    async fn test_get_tag_not_found() {
        let ingredient_repo = MockIngredientRepository::new();
        let mut tag_repo = MockTagRepository::new();

        tag_repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(ingredient_repo), Arc::new(tag_repo));

        let result = service.get_tag(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_ingredients_uses_prefix_search() {
        let mut ingredient_repo = MockIngredientRepository::new();
        let tag_repo = MockTagRepository::new();

        ingredient_repo
            .expect_search_by_prefix()
            .withf(|prefix| prefix == "flo")
            .times(1)
            .returning(|_| {
                Ok(vec![Ingredient {
                    id: 1,
                    name: "flour".to_string(),
                    measurement_unit: "g".to_string(),
                }])
            });

        let service = CatalogService::new(Arc::new(ingredient_repo), Arc::new(tag_repo));

        let found = service.list_ingredients(Some("flo")).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "flour");
    }

    #[tokio::test]
    async fn test_empty_prefix_lists_everything() {
        let mut ingredient_repo = MockIngredientRepository::new();
        let tag_repo = MockTagRepository::new();

        ingredient_repo.expect_list().times(1).returning(|| Ok(vec![]));

        let service = CatalogService::new(Arc::new(ingredient_repo), Arc::new(tag_repo));

        let found = service.list_ingredients(Some("")).await.unwrap();

        assert!(found.is_empty());
    }
}
