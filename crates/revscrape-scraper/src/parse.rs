//! Pure helpers for turning a listing page into review API coordinates.
//!
//! The listing page is a Next.js document. Its server-side props are
//! serialized into `<script id="__NEXT_DATA__" type="application/json">`, and
//! the `buildId` in that blob versions the `/_next/data/<buildId>/...` routes.

use scraper::{Html, Selector};
use thiserror::Error;

/// Literal that precedes the business-unit slug in a listing URL.
pub const LISTING_MARKER: &str = "review/";

const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";

/// Why a build identifier could not be read from a listing page.
#[derive(Debug, Error)]
pub enum BuildIdError {
    #[error("no __NEXT_DATA__ script element")]
    MissingScript,

    #[error("__NEXT_DATA__ is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("__NEXT_DATA__ has no string buildId")]
    MissingField,
}

/// Extracts the business-unit slug from a listing URL.
///
/// The slug is the path segment after the last `review/`, so
/// `https://www.trustpilot.com/review/www.example.com?page=2` yields
/// `www.example.com`. Returns `None` when the marker is absent or nothing
/// follows it.
#[must_use]
pub fn extract_business_unit(target: &str) -> Option<&str> {
    let (_, rest) = target.rsplit_once(LISTING_MARKER)?;
    let slug = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

/// Reads `buildId` from the page's `__NEXT_DATA__` script.
///
/// # Errors
///
/// Returns [`BuildIdError`] when the script is absent, its contents do not
/// parse as JSON, or `buildId` is missing, empty, or not a string.
pub fn extract_build_id(html: &str) -> Result<String, BuildIdError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(NEXT_DATA_SELECTOR).expect("valid selector");

    let script = document
        .select(&selector)
        .next()
        .ok_or(BuildIdError::MissingScript)?;
    let raw: String = script.text().collect();

    let data: serde_json::Value = serde_json::from_str(raw.trim())?;
    match data.get("buildId").and_then(serde_json::Value::as_str) {
        Some(build_id) if !build_id.is_empty() => Ok(build_id.to_owned()),
        _ => Err(BuildIdError::MissingField),
    }
}

/// Composes the review data route for a listing served from `origin`.
#[must_use]
pub fn build_api_url(origin: &str, build_id: &str, business_unit: &str) -> String {
    format!(
        "{origin}/_next/data/{build_id}/review/{business_unit}.json?sort=recency&businessUnit={business_unit}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_next_data(payload: &str) -> String {
        format!(
            r#"<!DOCTYPE html><html><head><title>Acme Reviews</title></head><body>
<div id="__next"></div>
<script id="__NEXT_DATA__" type="application/json">{payload}</script>
</body></html>"#
        )
    }

    // -----------------------------------------------------------------------
    // extract_business_unit
    // -----------------------------------------------------------------------

    #[test]
    fn business_unit_from_plain_listing_url() {
        assert_eq!(
            extract_business_unit("https://www.trustpilot.com/review/www.example.com"),
            Some("www.example.com")
        );
    }

    #[test]
    fn business_unit_stops_at_query_and_fragment() {
        assert_eq!(
            extract_business_unit("https://www.trustpilot.com/review/acme.io?languages=all#top"),
            Some("acme.io")
        );
    }

    #[test]
    fn business_unit_ignores_trailing_slash() {
        assert_eq!(
            extract_business_unit("https://www.trustpilot.com/review/acme.io/"),
            Some("acme.io")
        );
    }

    #[test]
    fn business_unit_uses_last_marker() {
        assert_eq!(
            extract_business_unit("https://host/review/ignored/review/acme.io"),
            Some("acme.io")
        );
    }

    #[test]
    fn business_unit_missing_marker_is_none() {
        assert!(extract_business_unit("https://www.trustpilot.com/categories/bank").is_none());
    }

    #[test]
    fn business_unit_empty_slug_is_none() {
        assert!(extract_business_unit("https://www.trustpilot.com/review/").is_none());
    }

    // -----------------------------------------------------------------------
    // extract_build_id
    // -----------------------------------------------------------------------

    #[test]
    fn build_id_from_next_data() {
        let html = page_with_next_data(
            r#"{"props":{"pageProps":{}},"page":"/review/[businessUnit]","buildId":"businessunitprofile-consumersite-2.1023.0"}"#,
        );
        assert_eq!(
            extract_build_id(&html).unwrap(),
            "businessunitprofile-consumersite-2.1023.0"
        );
    }

    #[test]
    fn build_id_ignores_other_scripts() {
        let html = format!(
            r#"<html><body><script>var buildId = "decoy";</script>{}</body></html>"#,
            r#"<script id="__NEXT_DATA__" type="application/json">{"buildId":"real"}</script>"#
        );
        assert_eq!(extract_build_id(&html).unwrap(), "real");
    }

    #[test]
    fn build_id_missing_script() {
        let html = "<html><body><p>Access denied</p></body></html>";
        assert!(matches!(
            extract_build_id(html),
            Err(BuildIdError::MissingScript)
        ));
    }

    #[test]
    fn build_id_malformed_json() {
        let html = page_with_next_data("{not json");
        assert!(matches!(
            extract_build_id(&html),
            Err(BuildIdError::Malformed(_))
        ));
    }

    #[test]
    fn build_id_field_absent() {
        let html = page_with_next_data(r#"{"props":{}}"#);
        assert!(matches!(
            extract_build_id(&html),
            Err(BuildIdError::MissingField)
        ));
    }

    #[test]
    fn build_id_non_string_is_missing() {
        let html = page_with_next_data(r#"{"buildId":42}"#);
        assert!(matches!(
            extract_build_id(&html),
            Err(BuildIdError::MissingField)
        ));
    }

    // -----------------------------------------------------------------------
    // build_api_url
    // -----------------------------------------------------------------------

    #[test]
    fn api_url_follows_data_route_template() {
        assert_eq!(
            build_api_url("https://www.trustpilot.com", "b-42", "acme.io"),
            "https://www.trustpilot.com/_next/data/b-42/review/acme.io.json?sort=recency&businessUnit=acme.io"
        );
    }
}
