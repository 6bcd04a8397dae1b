//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence or serialization
//! concerns; DTO mapping happens in the API layer.
//!
//! # Entity Types
//!
//! - [`User`] - Registered user and author identity
//! - [`Tag`] - Recipe tag catalog entry
//! - [`Ingredient`] - Ingredient catalog entry
//! - [`Recipe`] - A published recipe with tags and ingredient amounts
//! - [`CartEntry`] / [`RecipeRef`] - Per-request shopping-cart snapshots
//! - [`RelationKind`] - Favorite / cart-item relation variants

pub mod cart;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;

pub use cart::{CartEntry, RecipeRef, RelationKind};
pub use ingredient::Ingredient;
pub use recipe::{NewRecipe, NewRecipeIngredient, Recipe, RecipeIngredient};
pub use tag::Tag;
pub use user::{User, author_display_name};
