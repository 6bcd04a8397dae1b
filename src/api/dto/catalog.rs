//! DTOs for tag and ingredient catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Ingredient, RecipeIngredient, Tag};

/// Tag representation.
#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            slug: tag.slug,
        }
    }
}

/// Catalog ingredient representation.
#[derive(Debug, Serialize)]
pub struct IngredientResponse {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}

/// Ingredient line inside a recipe response: catalog fields plus amount.
#[derive(Debug, Serialize)]
pub struct IngredientAmountResponse {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i64,
}

impl From<RecipeIngredient> for IngredientAmountResponse {
    fn from(item: RecipeIngredient) -> Self {
        Self {
            id: item.ingredient_id,
            name: item.name,
            measurement_unit: item.measurement_unit,
            amount: item.amount,
        }
    }
}

/// Query parameters for the ingredient listing.
#[derive(Debug, Deserialize)]
pub struct IngredientFilterParams {
    /// Name prefix filter, matching the search-as-you-type box.
    pub name: Option<String>,
}
