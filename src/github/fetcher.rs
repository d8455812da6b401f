//! The "fetch all repositories" facade.

use octocrab::Octocrab;
use tracing::debug;

use super::error::FetchError;
use super::filter::RepositoryFilter;
use super::gateway::{OctocrabRepositoryDirectory, RepositoryDirectory};
use super::models::RepositoryRecord;
use super::options::FetchOptions;
use super::owner::resolve_owner;
use super::route::ListingRoute;

/// Resolves an owner, lists its repositories, and filters them.
pub struct RepositoryFetcher<'client, Directory>
where
    Directory: RepositoryDirectory + ?Sized,
{
    directory: &'client Directory,
}

impl<'client, Directory> RepositoryFetcher<'client, Directory>
where
    Directory: RepositoryDirectory + ?Sized,
{
    /// Create a fetcher backed by the given directory.
    #[must_use]
    pub const fn new(directory: &'client Directory) -> Self {
        Self { directory }
    }

    /// Fetch every repository of `options.owner` that passes the filters.
    ///
    /// The result keeps the order GitHub returned. Nothing is returned
    /// unless every request succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingOwner`] before any request when no owner
    /// is set, [`FetchError::OwnerNotFound`] or
    /// [`FetchError::InvalidTeamContext`] when resolution fails, and any
    /// directory error unchanged.
    pub async fn fetch_all(
        &self,
        options: &FetchOptions,
    ) -> Result<Vec<RepositoryRecord>, FetchError> {
        let raw_owner = options
            .owner
            .as_deref()
            .filter(|owner| !owner.is_empty())
            .ok_or(FetchError::MissingOwner)?;

        let owner = resolve_owner(self.directory, raw_owner).await?;
        let route = ListingRoute::select(&owner);
        debug!(%route, "listing repositories");

        let filter = RepositoryFilter::from_options(options);
        self.directory.list_repositories(&route, &filter).await
    }
}

/// Fetches all matching repositories using a caller-owned Octocrab client.
///
/// # Errors
///
/// See [`RepositoryFetcher::fetch_all`].
pub async fn fetch_all_repositories(
    client: &Octocrab,
    options: &FetchOptions,
) -> Result<Vec<RepositoryRecord>, FetchError> {
    let directory = OctocrabRepositoryDirectory::new(client.clone());
    RepositoryFetcher::new(&directory).fetch_all(options).await
}
