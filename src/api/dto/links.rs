//! DTOs for the mapping listing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::MappingStats;

/// All mappings with their click totals.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub items: Vec<LinkItem>,
}

/// One mapping in the listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkItem {
    pub code: String,
    pub long_url: String,
    pub alias: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,
}

impl From<MappingStats> for LinkItem {
    fn from(stats: MappingStats) -> Self {
        Self {
            code: stats.mapping.code,
            long_url: stats.mapping.target,
            alias: stats.mapping.alias,
            expires_at: stats.mapping.expires_at,
            created_at: stats.mapping.created_at,
            total_clicks: stats.total_clicks,
        }
    }
}
