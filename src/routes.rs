//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /s/{code}`   - Short link resolution (public)
//! - `GET /health`     - Health check (public)
//! - `/api/*`          - REST API; write endpoints require a Bearer token
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Bearer token on the protected route set
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, shortlink_redirect_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Route-level layers are used throughout so the public and protected
/// method routers for the same path (`GET` vs `POST /api/recipes`) can
/// still be merged.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let public = api::routes::public_routes().route_layer(rate_limit::layer());

    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .route_layer(rate_limit::secure_layer());

    let api_router = public.merge(protected);

    let router = Router::new()
        .route("/s/{code}", get(shortlink_redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
