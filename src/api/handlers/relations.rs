//! Handlers for the favorite and shopping-cart relation toggles.
//!
//! Both relations share the same POST/DELETE shape; the handlers only differ
//! in the [`RelationKind`] they pass down.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::recipe::RecipeMinifiedResponse;
use crate::domain::entities::RelationKind;
use crate::error::AppError;
use crate::state::{AppState, CurrentUser};

/// Adds a recipe to the user's favorites.
///
/// # Endpoint
///
/// `POST /api/recipes/{id}/favorite`
///
/// # Errors
///
/// Returns 404 for an unknown recipe, 400 when it is already in favorites.
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<RecipeMinifiedResponse>), AppError> {
    add_relation(&state, RelationKind::Favorite, user, id).await
}

/// Removes a recipe from the user's favorites.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}/favorite`
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    remove_relation(&state, RelationKind::Favorite, user, id).await
}

/// Adds a recipe to the user's shopping cart.
///
/// # Endpoint
///
/// `POST /api/recipes/{id}/shopping_cart`
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<RecipeMinifiedResponse>), AppError> {
    add_relation(&state, RelationKind::CartItem, user, id).await
}

/// Removes a recipe from the user's shopping cart.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}/shopping_cart`
pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    remove_relation(&state, RelationKind::CartItem, user, id).await
}

async fn add_relation(
    state: &AppState,
    kind: RelationKind,
    user: CurrentUser,
    recipe_id: i64,
) -> Result<(StatusCode, Json<RecipeMinifiedResponse>), AppError> {
    let recipe = state
        .recipe_service
        .add_relation(kind, user.id, recipe_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RecipeMinifiedResponse::from(&recipe)),
    ))
}

async fn remove_relation(
    state: &AppState,
    kind: RelationKind,
    user: CurrentUser,
    recipe_id: i64,
) -> Result<StatusCode, AppError> {
    state
        .recipe_service
        .remove_relation(kind, user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
