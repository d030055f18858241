//! API route configuration.

use crate::api::handlers::{delete_link_handler, link_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Link management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /links`          - List all mappings with click totals
/// - `DELETE /links/{code}`   - Delete a mapping and its clicks
pub fn management_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(link_list_handler))
        .route("/links/{code}", delete(delete_link_handler))
}
