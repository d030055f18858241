//! Handler for the target reachability check.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::validate::{ValidateRequest, ValidateResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Checks that a URL answers `200 OK` before a client shortens it.
///
/// # Endpoint
///
/// `POST /validate`
///
/// Accepts `url` as JSON or form data. Redirects are followed.
///
/// # Errors
///
/// Returns 400 Bad Request with "URL is not reachable" for any failed
/// request or non-200 status.
pub async fn validate_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ValidateRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    if !state.reachability.is_reachable(&payload.url).await {
        return Err(AppError::bad_request(
            "URL is not reachable",
            json!({ "url": payload.url }),
        ));
    }

    Ok(Json(ValidateResponse {
        url: payload.url,
        message: "Valid URL".to_string(),
    }))
}
