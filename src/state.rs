//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, CatalogService, RecipeService, ShoppingListService,
};
use crate::infrastructure::persistence::{
    PgCartRepository, PgIngredientRepository, PgRecipeRepository, PgTagRepository,
    PgTokenRepository,
};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub recipe_service: Arc<RecipeService<PgRecipeRepository, PgCartRepository>>,
    pub shopping_list_service: Arc<ShoppingListService<PgCartRepository>>,
    pub catalog_service: Arc<CatalogService<PgIngredientRepository, PgTagRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    /// Public origin used when building absolute short links.
    pub base_url: String,
}

/// Identity of the authenticated user, attached to request extensions by the
/// auth middleware.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: i64,
}
