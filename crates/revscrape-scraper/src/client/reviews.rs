//! Review page fetching: one synchronous first page, then a concurrent fan-out.

use futures::stream::{FuturesUnordered, StreamExt};
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::pagination::{pages_to_fetch, remaining_pages};
use crate::types::{FirstPageEnvelope, PageEnvelope, ResolvedEndpoint, ReviewRecord};

use super::ReviewClient;

impl ReviewClient {
    /// Fetches up to `max_pages` pages of reviews from a resolved endpoint.
    ///
    /// The first page is requested alone to learn `totalPages`. Pages
    /// `2..=min(max_pages, totalPages)` are then requested concurrently on
    /// the calling task and appended as they complete, so the returned order
    /// is completion order, not page order.
    ///
    /// **All-or-nothing semantics**: the first failing page aborts the fetch
    /// and discards every record gathered so far. Requests still in flight
    /// are cancelled when the pending set is dropped.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Blocked`]: any page returned a non-2xx status.
    /// - [`FetchError::Http`]: network or TLS failure on any page.
    /// - [`FetchError::Envelope`]: a body lacks `pageProps.reviews` (or, on
    ///   the first page, `pageProps.filters.pagination.totalPages`).
    pub async fn fetch_reviews(
        &self,
        endpoint: &ResolvedEndpoint,
        max_pages: u32,
    ) -> Result<Vec<ReviewRecord>, FetchError> {
        let first: FirstPageEnvelope = self.post_page(&endpoint.api_url).await?;
        let total_pages = first.page_props.filters.pagination.total_pages;
        let pages = pages_to_fetch(max_pages, total_pages);
        let mut reviews = first.page_props.reviews;

        tracing::debug!(
            business_unit = %endpoint.business_unit,
            total_pages,
            pages,
            first_page_records = reviews.len(),
            "fetched first review page"
        );

        let mut in_flight: FuturesUnordered<_> = remaining_pages(pages)
            .map(|page| {
                let url = endpoint.page_url(page);
                async move {
                    let result = self.post_page::<PageEnvelope>(&url).await;
                    (page, result)
                }
            })
            .collect();

        while let Some((page, result)) = in_flight.next().await {
            match result {
                Ok(envelope) => {
                    tracing::debug!(
                        page,
                        records = envelope.page_props.reviews.len(),
                        "fetched review page"
                    );
                    reviews.extend(envelope.page_props.reviews);
                }
                Err(e) => {
                    tracing::warn!(
                        business_unit = %endpoint.business_unit,
                        page,
                        pending = in_flight.len(),
                        error = %e,
                        "review page failed; abandoning remaining pages"
                    );
                    return Err(e);
                }
            }
        }

        tracing::info!(
            business_unit = %endpoint.business_unit,
            pages,
            records = reviews.len(),
            "fetched reviews"
        );
        Ok(reviews)
    }

    /// POSTs to one review data route and decodes the envelope.
    async fn post_page<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Blocked {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| FetchError::Envelope {
            context: format!("review page {url}"),
            source: e,
        })
    }
}
