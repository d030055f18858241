//! Click analytics and mapping listings.

use std::sync::Arc;

use chrono::{Local, TimeZone};

use crate::domain::analytics::{ClickSummary, summarize_clicks};
use crate::domain::entities::MappingStats;
use crate::domain::repositories::{ClickRepository, MappingRepository};
use crate::error::AppError;

/// Read-only service over the click log.
///
/// Takes no lock: a click recorded while a summary is being built may or may
/// not be included in it.
pub struct AnalyticsService<M: MappingRepository, C: ClickRepository> {
    mapping_repository: Arc<M>,
    click_repository: Arc<C>,
}

impl<M: MappingRepository, C: ClickRepository> AnalyticsService<M, C> {
    /// Creates a new analytics service.
    pub fn new(mapping_repository: Arc<M>, click_repository: Arc<C>) -> Self {
        Self {
            mapping_repository,
            click_repository,
        }
    }

    /// Summarizes clicks on `code` by day in the host's local time zone.
    ///
    /// A code without clicks, or without a mapping, yields an empty summary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn summarize(&self, code: &str) -> Result<ClickSummary, AppError> {
        self.summarize_in(code, &Local).await
    }

    /// Summarizes clicks on `code` by day in `tz`.
    pub async fn summarize_in<Tz>(&self, code: &str, tz: &Tz) -> Result<ClickSummary, AppError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let clicks = self.click_repository.list_clicks_by_code(code).await?;
        Ok(summarize_clicks(&clicks, tz))
    }

    /// Lists every mapping with its total click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<MappingStats>, AppError> {
        self.mapping_repository.list_with_click_counts().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Mapping;
    use crate::domain::repositories::{MockClickRepository, MockMappingRepository};
    use chrono::{DateTime, Utc};
    use serde_json::json;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, d, h, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_summarize_groups_by_day() {
        let mut clicks = MockClickRepository::new();
        clicks
            .expect_list_clicks_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(vec![at(29, 9), at(29, 10), at(29, 11), at(30, 9)]));

        let service = AnalyticsService::new(Arc::new(MockMappingRepository::new()), Arc::new(clicks));
        let summary = service.summarize_in("abc123", &Utc).await.unwrap();

        assert_eq!(summary.total_clicks, 4);
        assert_eq!(summary.by_day.len(), 2);
        assert_eq!(summary.day("29 Jan 2025").unwrap().count, 3);
        assert_eq!(summary.day("30 Jan 2025").unwrap().count, 1);
    }

    #[tokio::test]
    async fn test_summarize_without_clicks_is_empty() {
        let mut clicks = MockClickRepository::new();
        clicks
            .expect_list_clicks_by_code()
            .returning(|_| Ok(vec![]));

        let service = AnalyticsService::new(Arc::new(MockMappingRepository::new()), Arc::new(clicks));
        let summary = service.summarize("nothing").await.unwrap();

        assert_eq!(summary, ClickSummary::default());
    }

    #[tokio::test]
    async fn test_summarize_propagates_storage_error() {
        let mut clicks = MockClickRepository::new();
        clicks
            .expect_list_clicks_by_code()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = AnalyticsService::new(Arc::new(MockMappingRepository::new()), Arc::new(clicks));
        let result = service.summarize("abc123").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_list_links() {
        let mut mappings = MockMappingRepository::new();
        let stats = vec![
            MappingStats {
                mapping: Mapping::new(
                    "abc123".to_string(),
                    "https://example.com".to_string(),
                    None,
                    None,
                    Utc::now(),
                ),
                total_clicks: 10,
            },
            MappingStats {
                mapping: Mapping::new(
                    "promo".to_string(),
                    "https://test.com".to_string(),
                    Some("promo".to_string()),
                    None,
                    Utc::now(),
                ),
                total_clicks: 0,
            },
        ];
        mappings
            .expect_list_with_click_counts()
            .times(1)
            .returning(move || Ok(stats.clone()));

        let service = AnalyticsService::new(Arc::new(mappings), Arc::new(MockClickRepository::new()));
        let links = service.list_links().await.unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].mapping.code, "abc123");
        assert_eq!(links[0].total_clicks, 10);
        assert_eq!(links[1].mapping.alias.as_deref(), Some("promo"));
    }
}
