use thiserror::Error;

/// The shared HTTP client could not be constructed.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("HTTP client construction failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid default header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },
}

/// A listing page could not be turned into a review API endpoint.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid listing URL \"{url}\": {reason}")]
    InvalidTarget { url: String, reason: String },

    #[error("HTTP error fetching listing page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no build identifier found on {url}: {reason}")]
    MissingBuildId { url: String, reason: String },

    #[error("embedded page metadata on {url} is not valid JSON: {source}")]
    MalformedMetadata {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A review page request failed or returned an unusable body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error fetching reviews: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request blocked: HTTP status {status} from {url}")]
    Blocked { status: u16, url: String },

    #[error("unexpected review envelope for {context}: {source}")]
    Envelope {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Either stage of scraping a single listing failed.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}
