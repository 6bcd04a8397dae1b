//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::recipe_service::RecipeService`] - Recipes, relations, short links
//! - [`services::shopping_list_service::ShoppingListService`] - Report generation
//! - [`services::catalog_service::CatalogService`] - Tags and ingredients
//! - [`services::auth_service::AuthService`] - API token verification

pub mod services;
