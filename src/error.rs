//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the library returns [`AppError`]. Handlers
//! return it directly; [`IntoResponse`] turns it into a JSON body of the form
//! `{ "error": { "code", "message", "details" } }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors produced by the allocation, resolution and analytics services.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing caller input. Never retried.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The requested alias is already taken.
    #[error("{message}")]
    AliasConflict { message: String, details: Value },

    /// The generator could not find a free code within its attempt budget.
    #[error("{message}")]
    AllocationExhausted { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The mapping exists but its expiration has passed.
    #[error("{message}")]
    Expired { message: String, details: Value },

    /// Storage-level uniqueness race that slipped past the service lock.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Opaque storage or runtime failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn alias_conflict(message: impl Into<String>, details: Value) -> Self {
        Self::AliasConflict {
            message: message.into(),
            details,
        }
    }
    pub fn exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::AllocationExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and stable error code for this variant.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::AliasConflict { .. } => (StatusCode::CONFLICT, "alias_conflict"),
            AppError::AllocationExhausted { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "allocation_exhausted")
            }
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Expired { .. } => (StatusCode::GONE, "expired"),
            AppError::Conflict { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "conflict"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Converts the error into its serializable payload without consuming a response.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::AliasConflict { message, details }
            | AppError::AllocationExhausted { message, details }
            | AppError::NotFound { message, details }
            | AppError::Expired { message, details }
            | AppError::Conflict { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            tracing::error!(error = %e, "Unique constraint violation");
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        tracing::error!(error = %e, "Migration error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::bad_request("x", json!({})), StatusCode::BAD_REQUEST),
            (AppError::alias_conflict("x", json!({})), StatusCode::CONFLICT),
            (
                AppError::exhausted("x", json!({})),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (AppError::not_found("x", json!({})), StatusCode::NOT_FOUND),
            (AppError::expired("x", json!({})), StatusCode::GONE),
            (
                AppError::conflict("x", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::internal("x", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_and_code().0, status);
        }
    }

    #[test]
    fn test_error_info_carries_message_and_details() {
        let err = AppError::alias_conflict("Alias already in use", json!({ "alias": "promo" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "alias_conflict");
        assert_eq!(info.message, "Alias already in use");
        assert_eq!(info.details["alias"], "promo");
        assert_eq!(err.to_string(), "Alias already in use");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::expired("This link has expired", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::GONE);
    }
}
