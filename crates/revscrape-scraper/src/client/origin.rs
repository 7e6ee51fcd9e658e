//! Listing URL origin extraction.

use crate::error::ResolveError;

/// Extracts the scheme+host origin from a listing URL.
///
/// Given `"https://www.trustpilot.com/review/acme.io"`, returns
/// `"https://www.trustpilot.com"`. The review data routes live on the same
/// origin as the listing page.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidTarget`] if the URL does not parse or has
/// no host.
pub fn extract_origin(target: &str) -> Result<String, ResolveError> {
    let url = reqwest::Url::parse(target).map_err(|e| ResolveError::InvalidTarget {
        url: target.to_owned(),
        reason: e.to_string(),
    })?;

    if url.host_str().is_none() {
        return Err(ResolveError::InvalidTarget {
            url: target.to_owned(),
            reason: "URL has no host".to_owned(),
        });
    }

    Ok(url.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_strips_path() {
        assert_eq!(
            extract_origin("https://www.trustpilot.com/review/acme.io").unwrap(),
            "https://www.trustpilot.com"
        );
    }

    #[test]
    fn origin_keeps_non_default_port() {
        assert_eq!(
            extract_origin("http://127.0.0.1:8081/review/acme.io").unwrap(),
            "http://127.0.0.1:8081"
        );
    }

    #[test]
    fn origin_rejects_relative_url() {
        let err = extract_origin("review/acme.io").unwrap_err();
        assert!(
            matches!(err, ResolveError::InvalidTarget { .. }),
            "expected InvalidTarget, got: {err:?}"
        );
    }

    #[test]
    fn origin_rejects_hostless_url() {
        assert!(extract_origin("mailto:reviews@acme.io").is_err());
    }
}
