//! Handlers for the read-only tag catalog.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::catalog::TagResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all tags.
///
/// # Endpoint
///
/// `GET /api/tags`
pub async fn list_tags_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TagResponse>>, AppError> {
    let tags = state.catalog_service.list_tags().await?;
    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

/// Retrieves one tag.
///
/// # Endpoint
///
/// `GET /api/tags/{id}`
pub async fn get_tag_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TagResponse>, AppError> {
    let tag = state.catalog_service.get_tag(id).await?;
    Ok(Json(TagResponse::from(tag)))
}
