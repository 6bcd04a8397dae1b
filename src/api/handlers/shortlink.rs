//! Handlers for short-link creation and resolution.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::api::dto::shortlink::ShortLinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the absolute short link for a recipe.
///
/// # Endpoint
///
/// `GET /api/recipes/{id}/get-link`
///
/// The token is derived from the id on every call; nothing is stored.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown recipe id.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let short_link = state.recipe_service.short_link(id, &state.base_url).await?;

    Ok(Json(ShortLinkResponse { short_link }))
}

/// Resolves a short-link token and redirects to the recipe page.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Errors
///
/// Returns 404 Not Found when the token is malformed or the decoded id
/// matches no recipe; the two cases are indistinguishable to the client.
pub async fn shortlink_redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let recipe_id = state.recipe_service.resolve_short_link(&code).await?;

    metrics::counter!("shortlink_redirects_total").increment(1);

    Ok(Redirect::temporary(&format!("/recipes/{}/", recipe_id)))
}
