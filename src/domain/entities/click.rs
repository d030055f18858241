//! Click event recorded for every successful redirect.

use chrono::{DateTime, Utc};

/// A click event to be appended to the log.
///
/// `source_address` and `client_agent` are kept verbatim for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub code: String,
    pub source_address: String,
    pub client_agent: String,
    pub occurred_at: DateTime<Utc>,
}

impl NewClick {
    /// Creates a click stamped with the current UTC time.
    pub fn now(code: impl Into<String>, source_address: String, client_agent: String) -> Self {
        Self {
            code: code.into(),
            source_address,
            client_agent,
            occurred_at: Utc::now(),
        }
    }
}
