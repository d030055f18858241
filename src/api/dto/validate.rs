//! DTOs for the reachability endpoint.

use serde::{Deserialize, Serialize};

/// URL to probe before shortening it.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub url: String,
}

/// Successful reachability check.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub url: String,
    pub message: String,
}
