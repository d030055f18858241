//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`            - Short link redirect
//! - `POST /shorten`           - Allocate a short code
//! - `POST /validate`          - Check that a target answers 200
//! - `GET  /analytics/{code}`  - Per-day click summary
//! - `GET  /health`            - Database health check
//! - `/api/*`                  - Link listing and deletion
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API from a browser
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    analytics_handler, health_handler, redirect_handler, shorten_handler, validate_handler,
};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

/// Routes and middleware without path normalization.
///
/// Static segments (`/shorten`, `/validate`, `/health`) take precedence over `/{code}`,
/// which is why those names are reserved as aliases.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/shorten", post(shorten_handler))
        .route("/validate", post(validate_handler))
        .route("/analytics/{code}", get(analytics_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::management_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
