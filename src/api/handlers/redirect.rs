//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Syntactic code check (malformed codes are answered 404, the same as
///    absent ones)
/// 2. Target lookup (404 if the code does not exist)
/// 3. Click recorded and awaited; the response is not produced until the
///    counter update has completed
/// 4. 302 Found with `Location` set to the stored target
///
/// The 302 status is part of the endpoint contract; axum's `Redirect`
/// helper only produces 303/307/308, so the response is assembled directly.
///
/// # Errors
///
/// Returns 404 Not Found for malformed or unknown codes and 500 on any
/// storage failure, never a redirect with an unrecorded click.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.link_service.follow_link(&code).await?;

    debug!(%code, %target, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}
