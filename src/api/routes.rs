//! API route configuration.
//!
//! Read endpoints are public; write endpoints and the report download
//! require Bearer token authentication via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    add_favorite_handler, add_to_cart_handler, create_recipe_handler,
    download_shopping_cart_handler, get_ingredient_handler, get_link_handler, get_recipe_handler,
    get_tag_handler, list_ingredients_handler, list_recipes_handler, list_tags_handler,
    remove_favorite_handler, remove_from_cart_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public read-only API routes.
///
/// # Endpoints
///
/// - `GET /recipes`               - Paginated recipe list
/// - `GET /recipes/{id}`          - Full recipe
/// - `GET /recipes/{id}/get-link` - Short link for a recipe
/// - `GET /tags`, `GET /tags/{id}`
/// - `GET /ingredients`, `GET /ingredients/{id}`
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes_handler))
        .route("/recipes/{id}", get(get_recipe_handler))
        .route("/recipes/{id}/get-link", get(get_link_handler))
        .route("/tags", get(list_tags_handler))
        .route("/tags/{id}", get(get_tag_handler))
        .route("/ingredients", get(list_ingredients_handler))
        .route("/ingredients/{id}", get(get_ingredient_handler))
}

/// API routes requiring Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /recipes`                        - Create a recipe
/// - `POST   /recipes/{id}/favorite`          - Add to favorites
/// - `DELETE /recipes/{id}/favorite`          - Remove from favorites
/// - `POST   /recipes/{id}/shopping_cart`     - Add to cart
/// - `DELETE /recipes/{id}/shopping_cart`     - Remove from cart
/// - `GET    /recipes/download_shopping_cart` - Aggregated shopping list
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", post(create_recipe_handler))
        .route(
            "/recipes/download_shopping_cart",
            get(download_shopping_cart_handler),
        )
        .route(
            "/recipes/{id}/favorite",
            post(add_favorite_handler).delete(remove_favorite_handler),
        )
        .route(
            "/recipes/{id}/shopping_cart",
            post(add_to_cart_handler).delete(remove_from_cart_handler),
        )
}
