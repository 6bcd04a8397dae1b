//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgRecipeRepository`] - Recipe storage and retrieval
//! - [`PgCartRepository`] - Favorite/cart relations and cart snapshots
//! - [`PgTagRepository`] - Tag catalog
//! - [`PgIngredientRepository`] - Ingredient catalog
//! - [`PgTokenRepository`] - API token verification

pub mod pg_cart_repository;
pub mod pg_ingredient_repository;
pub mod pg_recipe_repository;
pub mod pg_tag_repository;
pub mod pg_token_repository;

pub use pg_cart_repository::PgCartRepository;
pub use pg_ingredient_repository::PgIngredientRepository;
pub use pg_recipe_repository::PgRecipeRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_token_repository::PgTokenRepository;
