//! Shopping-list report service.

use std::sync::Arc;

use crate::domain::repositories::CartRepository;
use crate::domain::shopping_list::render_shopping_list;
use crate::error::AppError;

/// Service producing the downloadable shopping-list report.
///
/// All aggregation logic lives in [`crate::domain::shopping_list`]; this
/// service only fetches the per-request cart snapshot and hands it over.
pub struct ShoppingListService<C: CartRepository> {
    cart_repository: Arc<C>,
}

impl<C: CartRepository> ShoppingListService<C> {
    /// Creates a new shopping-list service.
    pub fn new(cart_repository: Arc<C>) -> Self {
        Self { cart_repository }
    }

    /// Builds the report text for the user's current cart.
    ///
    /// An empty cart is valid and yields a report with empty sections.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn shopping_list_text(&self, user_id: i64) -> Result<String, AppError> {
        let entries = self.cart_repository.cart_entries(user_id).await?;
        let recipes = self.cart_repository.cart_recipes(user_id).await?;

        Ok(render_shopping_list(&entries, &recipes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CartEntry, RecipeRef};
    use crate::domain::repositories::MockCartRepository;

    #[tokio::test]
    async fn test_report_from_cart_snapshot() {
        let mut cart_repo = MockCartRepository::new();

        cart_repo
            .expect_cart_entries()
            .withf(|user_id| *user_id == 7)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    CartEntry {
                        ingredient_name: "flour".to_string(),
                        unit: "g".to_string(),
                        amount: 200,
                        recipe_name: "Pancakes".to_string(),
                    },
                    CartEntry {
                        ingredient_name: "flour".to_string(),
                        unit: "g".to_string(),
                        amount: 300,
                        recipe_name: "Waffles".to_string(),
                    },
                ])
            });

        cart_repo
            .expect_cart_recipes()
            .withf(|user_id| *user_id == 7)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    RecipeRef {
                        name: "Pancakes".to_string(),
                        author: "Jane Doe".to_string(),
                    },
                    RecipeRef {
                        name: "Waffles".to_string(),
                        author: "bob_k".to_string(),
                    },
                ])
            });

        let service = ShoppingListService::new(Arc::new(cart_repo));

        let report = service.shopping_list_text(7).await.unwrap();

        assert!(report.contains("Flour — 500 g"));
        assert!(report.contains("1. Pancakes (Jane Doe)"));
        assert!(report.contains("2. Waffles (bob_k)"));
    }

    #[tokio::test]
    async fn test_empty_cart_is_not_an_error() {
        let mut cart_repo = MockCartRepository::new();

        cart_repo
            .expect_cart_entries()
            .times(1)
            .returning(|_| Ok(vec![]));
        cart_repo
            .expect_cart_recipes()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ShoppingListService::new(Arc::new(cart_repo));

        let report = service.shopping_list_text(7).await.unwrap();

        assert!(report.contains("Products:"));
        assert!(report.contains("Recipes:"));
    }
}
