//! Handler for per-code click analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::analytics::ClickSummary;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click totals for a code, grouped by local calendar day.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// # Response
///
/// ```json
/// {
///   "total_click_counts": 4,
///   "day": {
///     "01 Mar 2024": {
///       "click_counts": 3,
///       "timestamps": ["2024-03-01T09:00:00Z", "..."]
///     }
///   }
/// }
/// ```
///
/// Unknown codes produce an empty summary rather than 404.
pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ClickSummary>, AppError> {
    let summary = state.analytics_service.summarize(&code).await?;
    Ok(Json(summary))
}
