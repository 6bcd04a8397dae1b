//! Handlers for the read-only ingredient catalog.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::catalog::{IngredientFilterParams, IngredientResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists ingredients, optionally filtered by name prefix.
///
/// # Endpoint
///
/// `GET /api/ingredients?name=flo`
pub async fn list_ingredients_handler(
    State(state): State<AppState>,
    Query(params): Query<IngredientFilterParams>,
) -> Result<Json<Vec<IngredientResponse>>, AppError> {
    let ingredients = state
        .catalog_service
        .list_ingredients(params.name.as_deref())
        .await?;

    Ok(Json(
        ingredients
            .into_iter()
            .map(IngredientResponse::from)
            .collect(),
    ))
}

/// Retrieves one ingredient.
///
/// # Endpoint
///
/// `GET /api/ingredients/{id}`
pub async fn get_ingredient_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<IngredientResponse>, AppError> {
    let ingredient = state.catalog_service.get_ingredient(id).await?;
    Ok(Json(IngredientResponse::from(ingredient)))
}
