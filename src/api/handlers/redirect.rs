//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::application::services::Visitor;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the mapping by code
/// 2. Reject it if its expiration has passed
/// 3. Record a click with the peer address and `User-Agent`
/// 4. Return 303 See Other
///
/// A failed click write is logged and the redirect still happens.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor {
        source_address: addr.to_string(),
        client_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string(),
    };

    let target = state.link_service.resolve(&code, &visitor).await?;

    Ok(Redirect::to(&target))
}
