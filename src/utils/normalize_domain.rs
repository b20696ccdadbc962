//! Reduction of raw `domain` query input to a bare hostname.

use url::Url;

use crate::error::AppError;

/// Extracts the hostname used to build the probe URLs.
///
/// Handles the three accepted input shapes:
/// - a full URL (`https://example.com/path`) is parsed and reduced to its host
/// - a hostname with a path (`example.com/foo`) keeps everything before the
///   first `/`
/// - anything else passes through unchanged
///
/// No further validation is performed: hostname syntax, punycode, and ports
/// or userinfo in non-URL input are deliberately left alone.
///
/// # Errors
///
/// Returns [`AppError::InvalidDomain`] when scheme-bearing input fails to
/// parse as a URL or has no host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_domain("example.com").unwrap(), "example.com");
/// assert_eq!(normalize_domain("https://example.com/path").unwrap(), "example.com");
/// assert_eq!(normalize_domain("example.com/foo").unwrap(), "example.com");
/// ```
pub fn normalize_domain(input: &str) -> Result<String, AppError> {
    if input.contains("://") {
        let url = Url::parse(input).map_err(|_| AppError::InvalidDomain)?;
        return url
            .host_str()
            .map(str::to_string)
            .ok_or(AppError::InvalidDomain);
    }

    match input.split_once('/') {
        Some((host, _)) => Ok(host.to_string()),
        None => Ok(input.to_string()),
    }
}
