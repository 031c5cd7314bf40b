//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::json;

/// Default length for generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Shortest accepted code, generated or custom.
pub const MIN_CODE_LENGTH: usize = 6;

/// Longest accepted code, generated or custom.
pub const MAX_CODE_LENGTH: usize = 8;

/// Generates a random alphanumeric short code of the given length.
///
/// Codes are drawn uniformly from `[A-Za-z0-9]` using the thread-local RNG.
/// Collision-freedom is not guaranteed here: the store's unique constraint
/// is the arbiter, and a collision surfaces as a conflict to the caller.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a short code, generated or user-provided.
///
/// # Rules
///
/// - Length: 6-8 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if code.len() < MIN_CODE_LENGTH || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Code must be 6-8 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Code can only contain letters and digits",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
