//! Link creation, lookup, and redirect-resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_code};
use crate::utils::url_validator::validate_target;
use serde_json::json;

/// Service for creating, retrieving, and resolving short links.
///
/// All input validation happens here, before any storage access; handlers
/// only translate HTTP to service calls and back.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `target`.
    ///
    /// If `custom_code` is provided it is validated and used as-is; otherwise
    /// a random 6-character code is generated. Generation does not retry on
    /// collision: a generated code that already exists surfaces the same
    /// conflict a taken custom code does.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the target URL or custom code is
    /// invalid, [`AppError::Conflict`] if the code already exists, and
    /// [`AppError::Internal`] on database errors.
    pub async fn create_link(
        &self,
        target: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target(&target).map_err(|e| {
            AppError::bad_request("Invalid target URL", json!({ "reason": e.to_string() }))
        })?;

        let code = match custom_code {
            Some(custom) => {
                validate_code(&custom)?;
                custom
            }
            None => generate_code(DEFAULT_CODE_LENGTH),
        };

        self.link_repository.create(NewLink { code, target }).await
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed code and
    /// [`AppError::NotFound`] if no link matches.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        validate_code(code)?;

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Deletes a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed code and
    /// [`AppError::NotFound`] if no row was removed.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        validate_code(code)?;

        let deleted = self.link_repository.delete(code).await?;
        if !deleted {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    /// Resolves a redirect: looks up the target and records the click.
    ///
    /// The click is recorded and awaited before the target is returned, so a
    /// redirect response is never produced for an unrecorded click. A
    /// malformed code is reported exactly like an absent one; the redirect
    /// path does not reveal whether a code is invalid or merely unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed or unknown codes and
    /// [`AppError::Internal`] on database errors.
    pub async fn follow_link(&self, code: &str) -> Result<String, AppError> {
        if validate_code(code).is_err() {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        // The row may have been deleted between lookup and touch; the store
        // re-checks and reports no match.
        let recorded = self.link_repository.record_click(code).await?;
        if !recorded {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        Ok(link.target)
    }
}
