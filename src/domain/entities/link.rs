//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short link with its click metadata.
///
/// `code` is the external identifier used in redirect paths; `id` is the
/// internal surrogate key and is never serialized to API responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Returns true if the link has been visited at least once.
    pub fn has_clicks(&self) -> bool {
        self.clicks > 0
    }
}

/// Input data for creating a new link.
///
/// `clicks`, `last_clicked`, and `created_at` are set by the store at insert
/// time; callers only choose the code and the destination.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target: String,
}
