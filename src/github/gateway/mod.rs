//! Directory gateways for looking up owners and listing repositories.
//!
//! The fetcher only talks to [`RepositoryDirectory`], so tests can swap in a
//! mock while [`OctocrabRepositoryDirectory`] handles real HTTP requests.

mod client;
mod directory;
mod error_mapping;

pub use client::build_octocrab_client;
pub use directory::{LISTING_PAGE_SIZE, OctocrabRepositoryDirectory};

use async_trait::async_trait;

use crate::github::error::FetchError;
use crate::github::filter::RepositoryFilter;
use crate::github::models::RepositoryRecord;
use crate::github::owner::OwnerKind;
use crate::github::route::ListingRoute;

/// Source of owner metadata and repository listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryDirectory: Send + Sync {
    /// Looks up a user or organization by login.
    ///
    /// Returns `Ok(None)` when no such account exists.
    async fn lookup_owner(&self, name: &str) -> Result<Option<OwnerKind>, FetchError>;

    /// Drains every page of `route`, keeping only the records `filter`
    /// accepts. Pages are filtered as they arrive and concatenated in order.
    async fn list_repositories(
        &self,
        route: &ListingRoute,
        filter: &RepositoryFilter,
    ) -> Result<Vec<RepositoryRecord>, FetchError>;
}
