//! Review API wire types and the records handed to callers.
//!
//! ## Envelope shape
//!
//! The review JSON endpoint is the data route of a Next.js page. Every
//! response wraps its payload in `pageProps`:
//!
//! ```text
//! first page:  {"pageProps": {"reviews": [...], "filters": {"pagination": {"totalPages": 12}}}}
//! later pages: {"pageProps": {"reviews": [...]}}
//! ```
//!
//! Later pages usually carry `filters` too, but it is not relied upon.
//!
//! Review objects are not interpreted. Their schema belongs to the upstream
//! site and changes without notice, so they are kept as raw JSON maps.

use serde::{Deserialize, Serialize};

/// One review exactly as returned by the API.
pub type ReviewRecord = serde_json::Map<String, serde_json::Value>;

/// Body of the first (unpaged) review request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstPageEnvelope {
    pub page_props: FirstPageProps,
}

#[derive(Debug, Deserialize)]
pub struct FirstPageProps {
    pub reviews: Vec<ReviewRecord>,
    pub filters: Filters,
}

#[derive(Debug, Deserialize)]
pub struct Filters {
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_pages: u32,
}

/// Body of a `&page=<n>` review request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    pub page_props: PageProps,
}

#[derive(Debug, Deserialize)]
pub struct PageProps {
    pub reviews: Vec<ReviewRecord>,
}

/// The review API URL derived for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    /// Full URL of the first page, query string included.
    pub api_url: String,
    pub build_id: String,
    pub business_unit: String,
}

impl ResolvedEndpoint {
    /// URL for page `page` (1-based). Page 1 is [`Self::api_url`] itself.
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        if page <= 1 {
            self.api_url.clone()
        } else {
            format!("{}&page={page}", self.api_url)
        }
    }
}

/// Reviews collected for one listing.
///
/// Record order follows request completion, not page number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub url: String,
    pub reviews: Vec<ReviewRecord>,
}
