//! Listing route selection.

use std::fmt;

use url::form_urlencoded;

use super::owner::{OwnerInfo, OwnerKind};

/// Media type that makes GitHub include `is_template` in repository payloads.
pub const TEMPLATE_PREVIEW_MEDIA_TYPE: &str = "application/vnd.github.baptiste-preview+json";

/// The GitHub endpoint used to list an owner's repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingRoute {
    /// Repositories owned by a personal account.
    User {
        /// Account login.
        username: String,
    },
    /// Repositories owned by an organization.
    Organization {
        /// Organization login.
        org: String,
    },
    /// Repositories a team within an organization can access.
    Team {
        /// Organization login.
        org: String,
        /// Team slug within the organization.
        team_slug: String,
    },
}

impl ListingRoute {
    /// Chooses the listing endpoint for a resolved owner.
    #[must_use]
    pub fn select(info: &OwnerInfo) -> Self {
        match (info.owner_type, info.team_slug.as_ref()) {
            (OwnerKind::Organization, Some(team_slug)) => Self::Team {
                org: info.owner.clone(),
                team_slug: team_slug.clone(),
            },
            (OwnerKind::Organization, None) => Self::Organization {
                org: info.owner.clone(),
            },
            (OwnerKind::User, _) => Self::User {
                username: info.owner.clone(),
            },
        }
    }

    /// REST path of the first page, with every name percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::User { username } => {
                format!("/users/{}/repos", encode_path_segment(username))
            }
            Self::Organization { org } => format!("/orgs/{}/repos", encode_path_segment(org)),
            Self::Team { org, team_slug } => format!(
                "/orgs/{}/teams/{}/repos",
                encode_path_segment(org),
                encode_path_segment(team_slug)
            ),
        }
    }
}

/// Percent-encodes `segment` so it stays a single path segment.
///
/// ```
/// use fetch_all_repos::github::route::encode_path_segment;
///
/// assert_eq!(encode_path_segment("team/extra"), "team%2Fextra");
/// assert_eq!(encode_path_segment("bad name"), "bad%20name");
/// ```
#[must_use]
pub fn encode_path_segment(segment: &str) -> String {
    // `byte_serialize` writes a space as `+` and escapes a literal `+`.
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl fmt::Display for ListingRoute {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User { username } => write!(formatter, "repositories of user {username}"),
            Self::Organization { org } => write!(formatter, "repositories of org {org}"),
            Self::Team { org, team_slug } => {
                write!(formatter, "repositories of team {org}/{team_slug}")
            }
        }
    }
}
