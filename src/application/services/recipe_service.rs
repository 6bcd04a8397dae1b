//! Recipe retrieval, creation, relation toggles, and short links.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewRecipe, Recipe, RelationKind};
use crate::domain::repositories::{CartRepository, RecipeRepository};
use crate::error::AppError;
use crate::utils::shortlink::{decode_code, encode_id};

/// Service for recipe operations and the short-link lifecycle.
pub struct RecipeService<R: RecipeRepository, C: CartRepository> {
    recipe_repository: Arc<R>,
    cart_repository: Arc<C>,
}

impl<R: RecipeRepository, C: CartRepository> RecipeService<R, C> {
    /// Creates a new recipe service.
    pub fn new(recipe_repository: Arc<R>, cart_repository: Arc<C>) -> Self {
        Self {
            recipe_repository,
            cart_repository,
        }
    }

    /// Retrieves a recipe by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no recipe matches the id.
    pub async fn get_recipe(&self, id: i64) -> Result<Recipe, AppError> {
        self.recipe_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found", json!({ "id": id })))
    }

    /// Lists recipes newest-first with the total count for pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_recipes(&self, offset: i64, limit: i64) -> Result<(Vec<Recipe>, i64), AppError> {
        let recipes = self.recipe_repository.list(offset, limit).await?;
        let total = self.recipe_repository.count().await?;
        Ok((recipes, total))
    }

    /// Creates a recipe. Field validation happens at the API boundary;
    /// referential integrity (unknown tag or ingredient ids) is enforced by
    /// the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for unknown tag/ingredient ids,
    /// [`AppError::Internal`] on database errors.
    pub async fn create_recipe(&self, new_recipe: NewRecipe) -> Result<Recipe, AppError> {
        self.recipe_repository.create(new_recipe).await
    }

    /// Adds a recipe to the user's favorites or cart.
    ///
    /// Returns the recipe so the handler can answer with its minified form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown recipe and
    /// [`AppError::Validation`] with the kind-specific message when the
    /// relation already exists.
    pub async fn add_relation(
        &self,
        kind: RelationKind,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<Recipe, AppError> {
        let recipe = self.get_recipe(recipe_id).await?;

        let created = self
            .cart_repository
            .add_relation(kind, user_id, recipe_id)
            .await?;

        if !created {
            return Err(AppError::bad_request(
                kind.already_exists_message(&recipe.name),
                json!({ "recipe_id": recipe_id }),
            ));
        }

        Ok(recipe)
    }

    /// Removes a recipe from the user's favorites or cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown recipe and
    /// [`AppError::Validation`] when the relation was absent.
    pub async fn remove_relation(
        &self,
        kind: RelationKind,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<(), AppError> {
        if !self.recipe_repository.exists(recipe_id).await? {
            return Err(AppError::not_found(
                "Recipe not found",
                json!({ "id": recipe_id }),
            ));
        }

        let removed = self
            .cart_repository
            .remove_relation(kind, user_id, recipe_id)
            .await?;

        if !removed {
            return Err(AppError::bad_request(
                "Recipe is not in this list.",
                json!({ "recipe_id": recipe_id }),
            ));
        }

        Ok(())
    }

    /// Builds the absolute short link for a recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown recipe.
    pub async fn short_link(&self, recipe_id: i64, base_url: &str) -> Result<String, AppError> {
        if !self.recipe_repository.exists(recipe_id).await? {
            return Err(AppError::not_found(
                "Recipe not found",
                json!({ "id": recipe_id }),
            ));
        }

        let code = encode_id(recipe_id);
        Ok(format!("{}/s/{}", base_url.trim_end_matches('/'), code))
    }

    /// Resolves a short-link token back to a recipe id.
    ///
    /// A malformed token and a token naming no stored recipe are the same
    /// outcome for the caller: the link does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] in both cases.
    pub async fn resolve_short_link(&self, code: &str) -> Result<i64, AppError> {
        let recipe_id = decode_code(code).map_err(|e| {
            AppError::not_found("Link not found", json!({ "reason": e.to_string() }))
        })?;

        if !self.recipe_repository.exists(recipe_id).await? {
            return Err(AppError::not_found(
                "Link not found",
                json!({ "id": recipe_id }),
            ));
        }

        Ok(recipe_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;
    use crate::domain::repositories::{MockCartRepository, MockRecipeRepository};
    use chrono::Utc;

    fn test_recipe(id: i64, name: &str) -> Recipe {
        Recipe {
            id,
            author: User {
                id: 1,
                email: "jane@example.com".to_string(),
                username: "jane_d".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
            },
            name: name.to_string(),
            text: "Instructions".to_string(),
            cooking_time: 15,
            tags: vec![],
            ingredients: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_recipe_success() {
        let mut recipe_repo = MockRecipeRepository::new();
        let cart_repo = MockCartRepository::new();

        let recipe = test_recipe(5, "Pancakes");
        recipe_repo
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .returning(move |_| Ok(Some(recipe.clone())));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let result = service.get_recipe(5).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Pancakes");
    }

    #[tokio::test]
    async fn test_get_recipe_not_found() {
        let mut recipe_repo = MockRecipeRepository::new();
        let cart_repo = MockCartRepository::new();

        recipe_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let result = service.get_recipe(99).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_relation_success() {
        let mut recipe_repo = MockRecipeRepository::new();
        let mut cart_repo = MockCartRepository::new();

        let recipe = test_recipe(5, "Pancakes");
        recipe_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(recipe.clone())));

        cart_repo
            .expect_add_relation()
            .withf(|kind, user_id, recipe_id| {
                *kind == RelationKind::Favorite && *user_id == 7 && *recipe_id == 5
            })
            .times(1)
            .returning(|_, _, _| Ok(true));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let result = service.add_relation(RelationKind::Favorite, 7, 5).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_add_relation_duplicate_uses_kind_message() {
        let mut recipe_repo = MockRecipeRepository::new();
        let mut cart_repo = MockCartRepository::new();

        let recipe = test_recipe(5, "Pancakes");
        recipe_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(recipe.clone())));

        cart_repo
            .expect_add_relation()
            .times(1)
            .returning(|_, _, _| Ok(false));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let result = service.add_relation(RelationKind::CartItem, 7, 5).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(
            err.to_string(),
            "Recipe \"Pancakes\" is already in the shopping cart."
        );
    }

    #[tokio::test]
    async fn test_remove_relation_absent() {
        let mut recipe_repo = MockRecipeRepository::new();
        let mut cart_repo = MockCartRepository::new();

        recipe_repo.expect_exists().times(1).returning(|_| Ok(true));
        cart_repo
            .expect_remove_relation()
            .times(1)
            .returning(|_, _, _| Ok(false));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let result = service.remove_relation(RelationKind::Favorite, 7, 5).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Recipe is not in this list.");
    }

    #[tokio::test]
    async fn test_remove_relation_unknown_recipe() {
        let mut recipe_repo = MockRecipeRepository::new();
        let cart_repo = MockCartRepository::new();

        recipe_repo
            .expect_exists()
            .times(1)
            .returning(|_| Ok(false));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let result = service.remove_relation(RelationKind::Favorite, 7, 99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_short_link_format() {
        let mut recipe_repo = MockRecipeRepository::new();
        let cart_repo = MockCartRepository::new();

        recipe_repo.expect_exists().times(1).returning(|_| Ok(true));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let link = service
            .short_link(62, "https://food.example.com/")
            .await
            .unwrap();

        assert_eq!(link, "https://food.example.com/s/10");
    }

    #[tokio::test]
    async fn test_short_link_unknown_recipe() {
        let mut recipe_repo = MockRecipeRepository::new();
        let cart_repo = MockCartRepository::new();

        recipe_repo
            .expect_exists()
            .times(1)
            .returning(|_| Ok(false));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let result = service.short_link(99, "https://food.example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_short_link_round_trip() {
        let mut recipe_repo = MockRecipeRepository::new();
        let cart_repo = MockCartRepository::new();

        recipe_repo
            .expect_exists()
            .withf(|id| *id == 62)
            .times(1)
            .returning(|_| Ok(true));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let id = service.resolve_short_link("10").await.unwrap();

        assert_eq!(id, 62);
    }

    #[tokio::test]
    async fn test_resolve_short_link_invalid_token() {
        let recipe_repo = MockRecipeRepository::new();
        let cart_repo = MockCartRepository::new();

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        // Repository is never consulted for a malformed token.
        let result = service.resolve_short_link("foo!bar").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_short_link_unknown_recipe() {
        let mut recipe_repo = MockRecipeRepository::new();
        let cart_repo = MockCartRepository::new();

        recipe_repo
            .expect_exists()
            .times(1)
            .returning(|_| Ok(false));

        let service = RecipeService::new(Arc::new(recipe_repo), Arc::new(cart_repo));

        let result = service.resolve_short_link("Z").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
