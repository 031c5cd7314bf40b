//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`        - Create a short link
/// - `GET    /links`        - List all links, newest first
/// - `GET    /links/{code}` - Fetch one link with click metadata
/// - `DELETE /links/{code}` - Delete a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
}
