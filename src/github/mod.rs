//! Repository listing for GitHub users, organizations and teams.
//!
//! This module resolves an owner through the GitHub API, picks the matching
//! listing endpoint, drains every page and filters the records client-side.
//! Octocrab failures are mapped into [`FetchError`] variants so callers can
//! surface precise failures without exposing Octocrab internals.

pub mod error;
pub mod fetcher;
pub mod filter;
pub mod gateway;
pub mod models;
pub mod options;
pub mod owner;
pub mod rate_limit;
pub mod route;
pub mod token;

pub use error::FetchError;
pub use fetcher::{RepositoryFetcher, fetch_all_repositories};
pub use filter::RepositoryFilter;
pub use gateway::{OctocrabRepositoryDirectory, RepositoryDirectory, build_octocrab_client};
pub use models::{Permissions, RepositoryRecord};
pub use options::{AccessLevel, FetchOptions, Visibility};
pub use owner::{OwnerInfo, OwnerKind, OwnerSpec};
pub use rate_limit::RateLimitInfo;
pub use route::{ListingRoute, TEMPLATE_PREVIEW_MEDIA_TYPE};
pub use token::{DEFAULT_API_BASE, PersonalAccessToken, resolve_api_base};

#[cfg(test)]
pub use gateway::MockRepositoryDirectory;
