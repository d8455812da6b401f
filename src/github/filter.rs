//! Client-side repository filtering.
//!
//! GitHub's listing endpoints cannot filter on permissions, forks, archival
//! or template status, so every page is filtered locally as it arrives.

use super::models::RepositoryRecord;
use super::options::{AccessLevel, FetchOptions, Visibility};

/// Predicate pipeline built from [`FetchOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryFilter {
    visibility: Visibility,
    minimum_access: AccessLevel,
    include_forks: bool,
    include_archived: bool,
    include_templates: bool,
}

impl RepositoryFilter {
    /// Captures the filtering options.
    #[must_use]
    pub fn from_options(options: &FetchOptions) -> Self {
        Self {
            visibility: options.visibility,
            minimum_access: options.minimum_access.clone(),
            include_forks: options.include_forks,
            include_archived: options.include_archived,
            include_templates: options.include_templates,
        }
    }

    /// Returns true when `repository` passes every predicate.
    #[must_use]
    pub fn accepts(&self, repository: &RepositoryRecord) -> bool {
        self.visibility_matches(repository)
            && self.access_matches(repository)
            && (self.include_forks || !repository.is_fork())
            && (self.include_archived || !repository.is_archived())
            && (self.include_templates || !repository.is_template())
    }

    /// Keeps the accepted records of one page, preserving their order.
    #[must_use]
    pub fn retain_page(&self, mut page: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
        page.retain(|repository| self.accepts(repository));
        page
    }

    fn visibility_matches(&self, repository: &RepositoryRecord) -> bool {
        match self.visibility {
            Visibility::All => true,
            Visibility::Public => !repository.is_private(),
            Visibility::Private => repository.is_private(),
        }
    }

    // Without a permissions payload only the weakest level can be assumed.
    fn access_matches(&self, repository: &RepositoryRecord) -> bool {
        repository.permissions().map_or_else(
            || self.minimum_access.is_pull(),
            |permissions| permissions.grants(self.minimum_access.as_str()),
        )
    }
}
