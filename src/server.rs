//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and Axum server lifecycle.

use crate::application::services::{
    AuthService, CatalogService, RecipeService, ShoppingListService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgCartRepository, PgIngredientRepository, PgRecipeRepository, PgTagRepository,
    PgTokenRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate");

    let pool = Arc::new(pool);
    let recipe_repository = Arc::new(PgRecipeRepository::new(pool.clone()));
    let cart_repository = Arc::new(PgCartRepository::new(pool.clone()));
    let tag_repository = Arc::new(PgTagRepository::new(pool.clone()));
    let ingredient_repository = Arc::new(PgIngredientRepository::new(pool.clone()));
    let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));

    let state = AppState {
        db: pool,
        recipe_service: Arc::new(RecipeService::new(
            recipe_repository,
            cart_repository.clone(),
        )),
        shopping_list_service: Arc::new(ShoppingListService::new(cart_repository)),
        catalog_service: Arc::new(CatalogService::new(ingredient_repository, tag_repository)),
        auth_service: Arc::new(AuthService::new(
            token_repository,
            config.token_signing_secret.clone(),
        )),
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
