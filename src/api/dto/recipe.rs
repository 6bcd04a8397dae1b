//! DTOs for recipe endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::catalog::{IngredientAmountResponse, TagResponse};
use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::{NewRecipe, NewRecipeIngredient, Recipe};

/// Full recipe representation.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub author: AuthorResponse,
    pub tags: Vec<TagResponse>,
    pub ingredients: Vec<IngredientAmountResponse>,
    pub created_at: DateTime<Utc>,
}

/// Recipe author identity.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Compact recipe representation returned by relation toggles.
#[derive(Debug, Serialize)]
pub struct RecipeMinifiedResponse {
    pub id: i64,
    pub name: String,
    pub cooking_time: i32,
}

/// Paginated recipe list.
#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<RecipeResponse>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            text: recipe.text,
            cooking_time: recipe.cooking_time,
            author: AuthorResponse {
                id: recipe.author.id,
                username: recipe.author.username,
                first_name: recipe.author.first_name,
                last_name: recipe.author.last_name,
            },
            tags: recipe.tags.into_iter().map(TagResponse::from).collect(),
            ingredients: recipe
                .ingredients
                .into_iter()
                .map(IngredientAmountResponse::from)
                .collect(),
            created_at: recipe.created_at,
        }
    }
}

impl From<&Recipe> for RecipeMinifiedResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            cooking_time: recipe.cooking_time,
        }
    }
}

/// Request body for creating a recipe.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1))]
    pub text: String,

    /// Cooking time in minutes.
    #[validate(range(min = 1))]
    pub cooking_time: i32,

    #[validate(length(min = 1, message = "At least one tag is required"))]
    pub tags: Vec<i64>,

    #[validate(nested)]
    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    pub ingredients: Vec<RecipeIngredientRequest>,
}

/// One ingredient line of a create request.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct RecipeIngredientRequest {
    pub id: i64,

    #[validate(range(min = 1, message = "Amount must be a positive integer"))]
    pub amount: i64,
}

impl CreateRecipeRequest {
    /// Converts the validated request into the domain input.
    pub fn into_new_recipe(self, author_id: i64) -> NewRecipe {
        NewRecipe {
            author_id,
            name: self.name,
            text: self.text,
            cooking_time: self.cooking_time,
            tag_ids: self.tags,
            ingredients: self
                .ingredients
                .into_iter()
                .map(|item| NewRecipeIngredient {
                    ingredient_id: item.id,
                    amount: item.amount,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateRecipeRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Pancakes",
            "text": "Mix and fry.",
            "cooking_time": 20,
            "tags": [1],
            "ingredients": [{ "id": 3, "amount": 200 }]
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_ingredients_rejected() {
        let mut request = valid_request();
        request.ingredients.clear();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut request = valid_request();
        request.ingredients[0].amount = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_cooking_time_rejected() {
        let mut request = valid_request();
        request.cooking_time = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_new_recipe_carries_author() {
        let new_recipe = valid_request().into_new_recipe(7);
        assert_eq!(new_recipe.author_id, 7);
        assert_eq!(new_recipe.ingredients[0].ingredient_id, 3);
        assert_eq!(new_recipe.ingredients[0].amount, 200);
    }
}
