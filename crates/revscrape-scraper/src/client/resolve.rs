//! Endpoint resolution: listing page URL to review data route.

use crate::error::ResolveError;
use crate::parse::{build_api_url, extract_build_id, extract_business_unit, BuildIdError};
use crate::types::ResolvedEndpoint;

use super::origin::extract_origin;
use super::ReviewClient;

impl ReviewClient {
    /// Resolves a listing URL into its review API endpoint.
    ///
    /// Fetches the listing HTML, reads the Next.js `buildId` embedded in it,
    /// and composes `<origin>/_next/data/<buildId>/review/<slug>.json` with
    /// the fixed `sort=recency` and `businessUnit=<slug>` query parameters.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidTarget`]: the URL does not parse or has no
    ///   `review/<slug>` segment. No request is made.
    /// - [`ResolveError::Http`]: network or TLS failure.
    /// - [`ResolveError::UnexpectedStatus`]: the listing page returned non-2xx.
    /// - [`ResolveError::MissingBuildId`]: no `__NEXT_DATA__` script or no `buildId` in it.
    /// - [`ResolveError::MalformedMetadata`]: the `__NEXT_DATA__` script is not JSON.
    pub async fn resolve(&self, target: &str) -> Result<ResolvedEndpoint, ResolveError> {
        let origin = extract_origin(target)?;
        let business_unit = extract_business_unit(target)
            .ok_or_else(|| ResolveError::InvalidTarget {
                url: target.to_owned(),
                reason: "no business unit after \"review/\"".to_owned(),
            })?
            .to_owned();

        let response = self.client.get(target).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::UnexpectedStatus {
                status: status.as_u16(),
                url: target.to_owned(),
            });
        }

        let html = response.text().await?;
        let build_id = extract_build_id(&html).map_err(|e| match e {
            BuildIdError::Malformed(source) => ResolveError::MalformedMetadata {
                url: target.to_owned(),
                source,
            },
            other => ResolveError::MissingBuildId {
                url: target.to_owned(),
                reason: other.to_string(),
            },
        })?;

        let api_url = build_api_url(&origin, &build_id, &business_unit);
        tracing::debug!(
            url = target,
            build_id = %build_id,
            api_url = %api_url,
            "resolved review endpoint"
        );

        Ok(ResolvedEndpoint {
            api_url,
            build_id,
            business_unit,
        })
    }
}
