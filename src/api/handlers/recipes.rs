//! Handlers for recipe CRUD endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::api::dto::recipe::{CreateRecipeRequest, RecipeListResponse, RecipeResponse};
use crate::error::AppError;
use crate::state::{AppState, CurrentUser};
use serde_json::json;

/// Lists recipes newest-first.
///
/// # Endpoint
///
/// `GET /api/recipes?page=1&limit=10`
pub async fn list_recipes_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<RecipeListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|message| AppError::bad_request(message, json!({})))?;

    let (recipes, total) = state.recipe_service.list_recipes(offset, limit).await?;

    Ok(Json(RecipeListResponse {
        pagination: PaginationMeta::new(&params, total),
        items: recipes.into_iter().map(RecipeResponse::from).collect(),
    }))
}

/// Retrieves one recipe with author, tags, and ingredients.
///
/// # Endpoint
///
/// `GET /api/recipes/{id}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id.
pub async fn get_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipeResponse>, AppError> {
    let recipe = state.recipe_service.get_recipe(id).await?;
    Ok(Json(RecipeResponse::from(recipe)))
}

/// Creates a recipe owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /api/recipes`
///
/// # Errors
///
/// Returns 400 Bad Request when validation fails or a referenced tag or
/// ingredient does not exist.
pub async fn create_recipe_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), AppError> {
    payload.validate()?;

    let recipe = state
        .recipe_service
        .create_recipe(payload.into_new_recipe(user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(RecipeResponse::from(recipe))))
}
