//! Mapping entity representing a short code bound to a long URL.

use chrono::{DateTime, NaiveDate, Utc};

/// Display format for calendar dates, e.g. `29 Jan 2025`.
pub const DAY_FORMAT: &str = "%d %b %Y";

/// A short code and the long URL it redirects to.
///
/// `alias` is set only when the caller chose the code; in that case it is
/// identical to `code`. A mapping without `expires_at` never expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub code: String,
    pub target: String,
    pub alias: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(
        code: String,
        target: String,
        alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            target,
            alias,
            expires_at,
            created_at,
        }
    }

    /// Returns true if `now` is strictly after the expiration.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now > e)
    }

    /// Returns true if the stored expiration may be replaced at `now`.
    ///
    /// Renewal is open once the current expiration has passed or falls on
    /// the same UTC calendar day as `now`. A mapping without an expiration
    /// never expires and is never open.
    pub fn accepts_renewal_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            None => false,
            Some(current) => current < now || current.date_naive() == now.date_naive(),
        }
    }
}

/// Parses a day-granularity expiration (`YYYY-MM-DD`) into midnight UTC.
pub fn parse_expiration(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub code: String,
    pub target: String,
    pub alias: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// A mapping together with its total number of recorded clicks.
#[derive(Debug, Clone)]
pub struct MappingStats {
    pub mapping: Mapping,
    pub total_clicks: i64,
}
