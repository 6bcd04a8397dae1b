//! Handler for the shopping-list download endpoint.

use axum::{
    Extension,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::{AppState, CurrentUser};

/// Downloads the aggregated shopping list for the user's cart.
///
/// # Endpoint
///
/// `GET /api/recipes/download_shopping_cart`
///
/// # Response
///
/// A UTF-8 plain-text attachment named `shopping_list.txt`. The generation
/// timestamp is embedded in the body, not the filename, so repeated
/// downloads do not litter the client with differently named files.
///
/// An empty cart is not an error: the report is returned with empty
/// sections.
pub async fn download_shopping_cart_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppError> {
    let text = state
        .shopping_list_service
        .shopping_list_text(user.id)
        .await?;

    metrics::counter!("shopping_list_downloads_total").increment(1);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"shopping_list.txt\"",
            ),
        ],
        text,
    ))
}
