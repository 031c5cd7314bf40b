//! Target URL validation.
//!
//! A redirect destination must be an absolute web URL. Relative references,
//! non-web schemes (`javascript:`, `data:`, `file:`, ...), and host-less
//! URLs are all rejected before anything touches storage.

use url::Url;

/// Errors that can occur while validating a redirect target.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates that `input` is an absolute `http`/`https` URL with a host.
///
/// The target is stored exactly as provided; validation does not rewrite it.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for anything `Url::parse`
/// rejects (including relative references), [`TargetUrlError::UnsupportedScheme`]
/// for non-web schemes, and [`TargetUrlError::MissingHost`] for URLs without
/// a host component.
pub fn validate_target(input: &str) -> Result<(), TargetUrlError> {
    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedScheme),
    }

    if url.host_str().is_none() {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(())
}
