//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// `target` is modeled as optional so that its absence is reported as a
/// validation failure with the standard error body, not as a framework-level
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// The redirect destination (must be an absolute HTTP/HTTPS URL).
    pub target: Option<String>,

    /// Optional custom short code (6-8 alphanumeric characters).
    pub code: Option<String>,
}

/// JSON representation of a link.
///
/// The internal row id is not part of the API surface.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub target: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target: link.target,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}
