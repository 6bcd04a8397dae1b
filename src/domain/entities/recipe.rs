//! Recipe entity and creation inputs.

use chrono::{DateTime, Utc};

use super::tag::Tag;
use super::user::User;

/// A published recipe with its author, tags, and ingredient list.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: i64,
    pub author: User,
    pub name: String,
    pub text: String,
    /// Cooking time in minutes, always >= 1.
    pub cooking_time: i32,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<RecipeIngredient>,
    pub created_at: DateTime<Utc>,
}

/// One ingredient line of a recipe: catalog entry plus amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub ingredient_id: i64,
    pub name: String,
    pub measurement_unit: String,
    /// Positive integer amount, validated at the API boundary.
    pub amount: i64,
}

/// Input data for creating a new recipe.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub author_id: i64,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub tag_ids: Vec<i64>,
    pub ingredients: Vec<NewRecipeIngredient>,
}

/// One ingredient line of a [`NewRecipe`].
#[derive(Debug, Clone)]
pub struct NewRecipeIngredient {
    pub ingredient_id: i64,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_recipe_construction() {
        let recipe = Recipe {
            id: 7,
            author: User {
                id: 1,
                email: "jane@example.com".to_string(),
                username: "jane_d".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
            },
            name: "Pancakes".to_string(),
            text: "Mix and fry.".to_string(),
            cooking_time: 20,
            tags: vec![],
            ingredients: vec![RecipeIngredient {
                ingredient_id: 3,
                name: "flour".to_string(),
                measurement_unit: "g".to_string(),
                amount: 200,
            }],
            created_at: Utc::now(),
        };

        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.author.display_name(), "Jane Doe");
        assert_eq!(recipe.ingredients[0].amount, 200);
    }
}
