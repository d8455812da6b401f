//! Lists every repository of a GitHub user, organization, or team.
//!
//! The library wraps Octocrab to resolve an owner, pick the matching listing
//! endpoint, drain all pages and filter the repositories client-side by
//! visibility, permission level, and fork, archive, or template status.

pub mod config;
pub mod github;

pub use config::FetchAllReposConfig;
pub use github::{
    AccessLevel, FetchError, FetchOptions, OctocrabRepositoryDirectory, RepositoryDirectory,
    RepositoryFetcher, RepositoryRecord, Visibility, fetch_all_repositories,
};
