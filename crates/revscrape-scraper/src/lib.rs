//! Review scraping for Next.js-backed review sites.
//!
//! Three stages, used in order:
//! 1. [`ReviewClient::resolve`] turns a listing URL into the review data route.
//! 2. [`ReviewClient::fetch_reviews`] pages through that route.
//! 3. [`ReviewClient::scrape_many`] runs both for a list of listings, isolating failures.

pub mod batch;
pub mod client;
pub mod error;
pub mod pagination;
pub mod parse;
pub mod types;

pub use batch::{BatchReport, TargetFailure, Targets};
pub use client::{ClientSettings, ReviewClient};
pub use error::{ClientBuildError, FetchError, ResolveError, ScrapeError};
pub use types::{ResolvedEndpoint, ReviewRecord, ScrapeResult};
