//! Sequential multi-listing scraping with per-listing failure isolation.

use crate::client::ReviewClient;
use crate::error::ScrapeError;
use crate::types::ScrapeResult;

/// An ordered list of listing URLs.
///
/// Built from a lone URL or any sequence of them, so callers never have to
/// wrap a single target themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets(Vec<String>);

impl Targets {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for Targets {
    fn from(target: &str) -> Self {
        Self(vec![target.to_owned()])
    }
}

impl From<String> for Targets {
    fn from(target: String) -> Self {
        Self(vec![target])
    }
}

impl From<Vec<String>> for Targets {
    fn from(targets: Vec<String>) -> Self {
        Self(targets)
    }
}

impl From<Vec<&str>> for Targets {
    fn from(targets: Vec<&str>) -> Self {
        targets.into_iter().map(str::to_owned).collect()
    }
}

impl From<&[&str]> for Targets {
    fn from(targets: &[&str]) -> Self {
        targets.iter().map(|t| (*t).to_owned()).collect()
    }
}

impl<const N: usize> From<[&str; N]> for Targets {
    fn from(targets: [&str; N]) -> Self {
        targets.into_iter().map(str::to_owned).collect()
    }
}

impl FromIterator<String> for Targets {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A listing that could not be scraped, and why.
#[derive(Debug)]
pub struct TargetFailure {
    pub url: String,
    pub error: ScrapeError,
}

/// Outcome of [`ReviewClient::scrape_many`].
///
/// `results` holds succeeded listings in input order. Failed listings appear
/// only in `failures`, so a listing with zero reviews is still a success.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<ScrapeResult>,
    pub failures: Vec<TargetFailure>,
}

impl BatchReport {
    /// Number of listings attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.results.len() + self.failures.len()
    }

    /// `true` when listings were attempted and none succeeded.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.results.is_empty() && !self.failures.is_empty()
    }

    /// Total reviews across succeeded listings.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.results.iter().map(|r| r.reviews.len()).sum()
    }
}

impl ReviewClient {
    /// Resolves and fetches a single listing.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Resolve`] if the listing page cannot be turned
    /// into an endpoint, or [`ScrapeError::Fetch`] if any review page fails.
    pub async fn scrape_one(&self, url: &str, max_pages: u32) -> Result<ScrapeResult, ScrapeError> {
        let endpoint = self.resolve(url).await?;
        let reviews = self.fetch_reviews(&endpoint, max_pages).await?;
        Ok(ScrapeResult {
            url: url.to_owned(),
            reviews,
        })
    }

    /// Scrapes each listing in turn, never letting one failure stop the batch.
    ///
    /// Listings are processed strictly one after another: a listing's page
    /// fan-out finishes before the next listing is resolved. Whitespace-only
    /// entries are skipped; other entries are trimmed.
    pub async fn scrape_many(&self, targets: impl Into<Targets>, max_pages: u32) -> BatchReport {
        let targets = targets.into();
        let mut report = BatchReport::default();

        for url in targets.iter().map(str::trim).filter(|t| !t.is_empty()) {
            match self.scrape_one(url, max_pages).await {
                Ok(result) => report.results.push(result),
                Err(error) => {
                    tracing::error!(url, error = %error, "error scraping listing");
                    report.failures.push(TargetFailure {
                        url: url.to_owned(),
                        error,
                    });
                }
            }
        }

        if !report.failures.is_empty() {
            tracing::warn!(
                failed = report.failures.len(),
                total = report.attempted(),
                "some listings failed during scraping"
            );
        }

        report
    }
}
