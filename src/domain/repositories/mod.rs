//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contracts implemented by the
//! infrastructure layer; mock implementations are auto-generated via
//! `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`RecipeRepository`] - Recipe CRUD and existence checks
//! - [`CartRepository`] - Favorite/cart relations and cart snapshots
//! - [`TagRepository`] - Read-only tag catalog
//! - [`IngredientRepository`] - Read-only ingredient catalog
//! - [`TokenRepository`] - API token verification

pub mod cart_repository;
pub mod ingredient_repository;
pub mod recipe_repository;
pub mod tag_repository;
pub mod token_repository;

pub use cart_repository::CartRepository;
pub use ingredient_repository::IngredientRepository;
pub use recipe_repository::RecipeRepository;
pub use tag_repository::TagRepository;
pub use token_repository::TokenRepository;

#[cfg(test)]
pub use cart_repository::MockCartRepository;
#[cfg(test)]
pub use ingredient_repository::MockIngredientRepository;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
