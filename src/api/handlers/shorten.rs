//! Handler for the allocation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse, ShortenStatus};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, optionally under a custom alias and with an expiration date.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// JSON or `application/x-www-form-urlencoded` with the same field names.
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "promo",          // optional, "" means absent
///   "expiration": "2030-01-01" // optional, "" means absent
/// }
/// ```
///
/// # Response
///
/// `201 Created` for a new mapping, `200 OK` when the target was already
/// shortened (returned as is, renewed or with the renewal rejected).
///
/// ```json
/// {
///   "status": "created",
///   "code": "promo",
///   "short_url": "http://localhost:8080/promo",
///   "long_url": "https://example.com",
///   "expires_at": "2030-01-01T00:00:00Z",
///   "message": "New Short URL created: http://localhost:8080/promo"
/// }
/// ```
///
/// # Errors
///
/// - 400 for an invalid URL, alias or date
/// - 409 if the alias is taken
/// - 503 if no free code could be generated
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let allocation = state.link_service.allocate(payload.into()).await?;
    let short_url = state
        .link_service
        .short_url(&state.base_url, allocation.code());

    let response = ShortenResponse::from_allocation(allocation, short_url);
    let status = match response.status {
        ShortenStatus::Created => StatusCode::CREATED,
        _ => StatusCode::OK,
    };

    Ok((status, Json(response)))
}
