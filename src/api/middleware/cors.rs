//! Cross-origin policy for browser clients.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS layer that answers every origin.
///
/// Allows `GET`, `POST`, `DELETE` and `OPTIONS` with a `Content-Type`
/// header, which is all a browser form posting JSON needs.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
