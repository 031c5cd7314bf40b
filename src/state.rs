use std::sync::Arc;
use std::time::Instant;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Shared application state injected into all handlers.
///
/// Constructed once at startup; the pool behind the repository is the only
/// shared resource.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    /// Process start marker used by the health endpoint's uptime report.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<SqliteLinkRepository>>) -> Self {
        Self {
            link_service,
            started_at: Instant::now(),
        }
    }
}
