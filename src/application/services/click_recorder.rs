//! Click log writer.

use std::sync::Arc;

use crate::domain::entities::NewClick;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Appends one click event per successful redirect.
///
/// Every call creates a new event; there is no deduplication. Errors are
/// returned to the caller, which decides whether they are fatal.
pub struct ClickRecorder<C: ClickRepository> {
    repository: Arc<C>,
}

impl<C: ClickRepository> ClickRecorder<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Records a click on `code` stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record(
        &self,
        code: &str,
        source_address: &str,
        client_agent: &str,
    ) -> Result<(), AppError> {
        let click = NewClick::now(code, source_address.to_string(), client_agent.to_string());
        self.repository.insert_click(click).await?;

        tracing::debug!(code, source_address, "Click recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_record_passes_visitor_through() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_insert_click()
            .withf(|click| {
                click.code == "abc123"
                    && click.source_address == "10.0.0.1:4000"
                    && click.client_agent == "curl/8.0"
            })
            .times(1)
            .returning(|_| Ok(()));

        let recorder = ClickRecorder::new(Arc::new(mock_repo));
        let result = recorder.record("abc123", "10.0.0.1:4000", "curl/8.0").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_record_surfaces_storage_error() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_insert_click()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let recorder = ClickRecorder::new(Arc::new(mock_repo));
        let result = recorder.record("abc123", "", "").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
