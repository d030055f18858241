//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::links::{LinkItem, LinkListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every mapping with its total click count, oldest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn link_list_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let items: Vec<LinkItem> = state
        .analytics_service
        .list_links()
        .await?
        .into_iter()
        .map(LinkItem::from)
        .collect();

    Ok(Json(LinkListResponse {
        total: items.len(),
        items,
    }))
}

/// Deletes a mapping and all of its clicks.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// The code becomes free for future allocation.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
