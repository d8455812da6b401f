//! Repository fixtures shared by unit and integration tests.
//!
//! Each fixture sets exactly one interesting attribute plus a `name`, so a
//! listing made of them shows which filter removed what.
//!
//! ```
//! use fetch_all_repos::github::models::test_support::{forked_repo, mixed_listing};
//!
//! assert!(forked_repo().is_fork());
//! assert_eq!(mixed_listing().len(), 8);
//! ```

use serde_json::json;

use super::RepositoryRecord;

fn fixture(value: serde_json::Value) -> RepositoryRecord {
    RepositoryRecord::from_value(value)
}

/// A public repository with no permissions payload.
#[must_use]
pub fn public_repo() -> RepositoryRecord {
    fixture(json!({ "name": "public", "private": false }))
}

/// A private repository with no permissions payload.
#[must_use]
pub fn private_repo() -> RepositoryRecord {
    fixture(json!({ "name": "private", "private": true }))
}

/// A forked repository.
#[must_use]
pub fn forked_repo() -> RepositoryRecord {
    fixture(json!({ "name": "forked", "fork": true }))
}

/// An archived repository.
#[must_use]
pub fn archived_repo() -> RepositoryRecord {
    fixture(json!({ "name": "archived", "archived": true }))
}

/// A template repository.
#[must_use]
pub fn template_repo() -> RepositoryRecord {
    fixture(json!({ "name": "template", "is_template": true }))
}

/// A repository the caller may only pull from.
#[must_use]
pub fn repo_with_pull() -> RepositoryRecord {
    fixture(json!({
        "name": "pull-only",
        "permissions": { "pull": true, "push": false, "admin": false }
    }))
}

/// A repository the caller may push to.
#[must_use]
pub fn repo_with_push() -> RepositoryRecord {
    fixture(json!({
        "name": "push",
        "permissions": { "pull": true, "push": true, "admin": false }
    }))
}

/// A repository the caller administers.
#[must_use]
pub fn repo_with_admin() -> RepositoryRecord {
    fixture(json!({
        "name": "admin",
        "permissions": { "pull": true, "push": true, "admin": true }
    }))
}

/// One of every fixture above, in declaration order.
#[must_use]
pub fn mixed_listing() -> Vec<RepositoryRecord> {
    vec![
        public_repo(),
        private_repo(),
        forked_repo(),
        archived_repo(),
        template_repo(),
        repo_with_pull(),
        repo_with_push(),
        repo_with_admin(),
    ]
}
