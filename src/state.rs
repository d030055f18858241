//! Shared state injected into every handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{AnalyticsService, LinkService};
use crate::infrastructure::persistence::{SqliteClickRepository, SqliteMappingRepository};
use crate::infrastructure::reachability::ReachabilityChecker;
use crate::utils::code_generator::CodeGenerator;

/// Link service wired to the SQLite repositories.
pub type SqliteLinkService = LinkService<SqliteMappingRepository, SqliteClickRepository>;

/// Analytics service wired to the SQLite repositories.
pub type SqliteAnalyticsService = AnalyticsService<SqliteMappingRepository, SqliteClickRepository>;

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<SqlitePool>,
    pub link_service: Arc<SqliteLinkService>,
    pub analytics_service: Arc<SqliteAnalyticsService>,
    pub reachability: ReachabilityChecker,
    /// Prefix for short URLs returned to callers.
    pub base_url: String,
}

impl AppState {
    /// Builds repositories and services over one pool.
    pub fn new(pool: Arc<SqlitePool>, generator: Arc<CodeGenerator>, base_url: String) -> Self {
        let mapping_repository = Arc::new(SqliteMappingRepository::new(pool.clone()));
        let click_repository = Arc::new(SqliteClickRepository::new(pool.clone()));

        let link_service = Arc::new(LinkService::new(
            mapping_repository.clone(),
            click_repository.clone(),
            generator,
        ));
        let analytics_service = Arc::new(AnalyticsService::new(
            mapping_repository,
            click_repository,
        ));

        Self {
            pool,
            link_service,
            analytics_service,
            reachability: ReachabilityChecker::default(),
            base_url,
        }
    }
}
