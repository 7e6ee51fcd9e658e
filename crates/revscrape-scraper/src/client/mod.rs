//! HTTP client for a review site's listing pages and review data routes.

mod origin;
mod resolve;
mod reviews;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;

use crate::error::ClientBuildError;

pub use origin::extract_origin;

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8";

/// Connection and header settings for [`ReviewClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Overall deadline for one request, body included.
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub accept_language: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36".to_owned(),
            accept_language: "en-US,en;q=0.9".to_owned(),
        }
    }
}

/// Review scraping client.
///
/// Wraps a single `reqwest::Client` so every listing page and review page in
/// a process shares one connection pool. Requests carry a browser-like
/// header set; the upstream site refuses clients that omit it. The
/// `accept-encoding` header is added by reqwest, which also decodes
/// gzip, brotli and deflate bodies.
///
/// Nothing is retried. A failed request is final for the listing it belongs to.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    pub(super) client: Client,
}

impl ReviewClient {
    /// Creates a `ReviewClient` with the configured timeouts and headers.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError::InvalidHeader`] if the user agent or
    /// accept-language is not a valid header value, or
    /// [`ClientBuildError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed (e.g., invalid TLS config).
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientBuildError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&settings.accept_language).map_err(|e| {
                ClientBuildError::InvalidHeader {
                    name: "accept-language",
                    reason: e.to_string(),
                }
            })?,
        );
        let user_agent = HeaderValue::from_str(&settings.user_agent).map_err(|e| {
            ClientBuildError::InvalidHeader {
                name: "user-agent",
                reason: e.to_string(),
            }
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;
        Ok(Self { client })
    }
}
