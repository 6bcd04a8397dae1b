//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod ingredients;
pub mod recipes;
pub mod relations;
pub mod shopping_list;
pub mod shortlink;
pub mod tags;

pub use health::health_handler;
pub use ingredients::{get_ingredient_handler, list_ingredients_handler};
pub use recipes::{create_recipe_handler, get_recipe_handler, list_recipes_handler};
pub use relations::{
    add_favorite_handler, add_to_cart_handler, remove_favorite_handler, remove_from_cart_handler,
};
pub use shopping_list::download_shopping_cart_handler;
pub use shortlink::{get_link_handler, shortlink_redirect_handler};
pub use tags::{get_tag_handler, list_tags_handler};
