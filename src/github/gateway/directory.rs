//! Octocrab-backed repository directory.

use async_trait::async_trait;
use http::HeaderMap;
use http::header::{ACCEPT, HeaderValue};
use octocrab::{Octocrab, Page};
use serde::Deserialize;
use tracing::trace;

use crate::github::error::FetchError;
use crate::github::filter::RepositoryFilter;
use crate::github::models::RepositoryRecord;
use crate::github::owner::OwnerKind;
use crate::github::rate_limit::RateLimitInfo;
use crate::github::route::{ListingRoute, TEMPLATE_PREVIEW_MEDIA_TYPE, encode_path_segment};

use super::RepositoryDirectory;
use super::error_mapping::{is_not_found, is_rate_limit_error, map_octocrab_error};

/// Page size requested from the listing endpoints (GitHub's maximum).
pub const LISTING_PAGE_SIZE: u8 = 100;

#[derive(Debug, Deserialize)]
struct ApiAccount {
    #[serde(rename = "type")]
    account_type: String,
}

/// Repository directory that talks to the GitHub REST API through Octocrab.
#[derive(Debug, Clone)]
pub struct OctocrabRepositoryDirectory {
    client: Octocrab,
}

impl OctocrabRepositoryDirectory {
    /// Wraps an existing Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    async fn fetch_page(
        &self,
        uri: &str,
        parameters: Option<&[(&str, &str)]>,
    ) -> Result<Page<RepositoryRecord>, FetchError> {
        match self
            .client
            .get_with_headers::<Page<RepositoryRecord>, _, _>(
                uri,
                parameters,
                Some(preview_headers()),
            )
            .await
        {
            Ok(page) => Ok(page),
            Err(error) => Err(self
                .map_octocrab_error_with_rate_limit("list repositories", &error)
                .await),
        }
    }

    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> FetchError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!(
                        "{base_message} (resets at {reset})",
                        reset = info.reset_at()
                    ),
                    None => base_message,
                };

                FetchError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let limit = u32::try_from(rate.limit).ok()?;
        let remaining = u32::try_from(rate.remaining).ok()?;
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

#[async_trait]
impl RepositoryDirectory for OctocrabRepositoryDirectory {
    async fn lookup_owner(&self, name: &str) -> Result<Option<OwnerKind>, FetchError> {
        let route = format!("/users/{}", encode_path_segment(name));
        match self.client.get::<ApiAccount, _, _>(route, None::<&()>).await {
            Ok(account) => Ok(Some(OwnerKind::from_account_type(&account.account_type))),
            Err(error) if is_not_found(&error) => Ok(None),
            Err(error) => Err(self
                .map_octocrab_error_with_rate_limit("look up owner", &error)
                .await),
        }
    }

    async fn list_repositories(
        &self,
        route: &ListingRoute,
        filter: &RepositoryFilter,
    ) -> Result<Vec<RepositoryRecord>, FetchError> {
        let per_page = LISTING_PAGE_SIZE.to_string();
        let query = [("per_page", per_page.as_str())];

        let mut page = self.fetch_page(&route.path(), Some(query.as_slice())).await?;
        let mut repositories = Vec::new();
        let mut page_number: u32 = 1;

        loop {
            let next = page.next.take();
            let received = page.items.len();
            let kept = filter.retain_page(page.items);
            trace!(
                %route,
                page = page_number,
                received,
                kept = kept.len(),
                "filtered repository page"
            );
            repositories.extend(kept);

            // Link-header URLs already carry the query string.
            let Some(next_uri) = next else {
                break;
            };
            page = self.fetch_page(&next_uri.to_string(), None).await?;
            page_number = page_number.saturating_add(1);
        }

        Ok(repositories)
    }
}

fn preview_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(TEMPLATE_PREVIEW_MEDIA_TYPE),
    );
    headers
}
