//! DTOs for the allocation endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::application::services::{Allocation, AllocationRequest};

/// Compiled regex for alias validation.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Request to shorten a URL.
///
/// Empty `alias` and `expiration` strings are treated as absent, which is
/// what HTML forms send for blank fields.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(length(min = 1, message = "Please provide a valid URL"))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional caller-chosen code.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub alias: Option<String>,

    /// Optional expiration date, `YYYY-MM-DD`.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub expiration: Option<String>,
}

impl From<ShortenRequest> for AllocationRequest {
    fn from(request: ShortenRequest) -> Self {
        AllocationRequest {
            target: request.url,
            alias: request.alias,
            expiration: request.expiration,
        }
    }
}

/// What the allocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortenStatus {
    Created,
    Exists,
    Renewed,
    RenewalRejected,
}

/// Response for every successful allocation outcome.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub status: ShortenStatus,
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    /// Human-readable summary.
    pub message: String,
}

impl ShortenResponse {
    /// Renders an allocation outcome with its short URL.
    pub fn from_allocation(allocation: Allocation, short_url: String) -> Self {
        let (status, message) = match &allocation {
            Allocation::Created(_) => (
                ShortenStatus::Created,
                format!("New Short URL created: {}", short_url),
            ),
            Allocation::Existing(_) => (
                ShortenStatus::Exists,
                format!(
                    "The original URL already exists in the database. Short URL: {}",
                    short_url
                ),
            ),
            Allocation::Renewed {
                formatted_expiration,
                ..
            } => (
                ShortenStatus::Renewed,
                format!(
                    "The expiration date for the existing URL has been updated to {}. Short URL: {}",
                    formatted_expiration, short_url
                ),
            ),
            Allocation::RenewalRejected(_) => (
                ShortenStatus::RenewalRejected,
                format!(
                    "The provided expiration date is not valid for updating. Current expiration date remains unchanged. Short URL: {}",
                    short_url
                ),
            ),
        };

        let mapping = match allocation {
            Allocation::Created(mapping)
            | Allocation::Existing(mapping)
            | Allocation::RenewalRejected(mapping)
            | Allocation::Renewed { mapping, .. } => mapping,
        };

        Self {
            status,
            code: mapping.code,
            short_url,
            long_url: mapping.target,
            expires_at: mapping.expires_at,
            message,
        }
    }
}
