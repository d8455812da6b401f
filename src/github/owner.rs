//! Owner parsing and resolution.
//!
//! An owner string names a user or organization, optionally followed by a
//! team slug (`org/team`). Resolution looks the account up through the
//! directory to learn whether it is an organization, which decides both the
//! listing route and whether a team is allowed at all.

use tracing::debug;

use super::error::FetchError;
use super::gateway::RepositoryDirectory;

/// Kind of GitHub account that owns repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    /// A personal account. Also used for other non-organization account
    /// types such as bots.
    User,
    /// An organization account.
    Organization,
}

impl OwnerKind {
    /// Maps the `type` field of `GET /users/{name}` onto an owner kind.
    #[must_use]
    pub fn from_account_type(account_type: &str) -> Self {
        if account_type == "Organization" {
            Self::Organization
        } else {
            Self::User
        }
    }

    /// Returns true for organizations.
    #[must_use]
    pub const fn is_organization(self) -> bool {
        matches!(self, Self::Organization)
    }
}

/// Owner string split into account name and optional team slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSpec {
    owner: String,
    team_slug: Option<String>,
}

impl OwnerSpec {
    /// Splits `raw` on its first `/`. An empty team segment counts as no team.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('/') {
            Some((owner, team)) => Self {
                owner: owner.to_owned(),
                team_slug: (!team.is_empty()).then(|| team.to_owned()),
            },
            None => Self {
                owner: raw.to_owned(),
                team_slug: None,
            },
        }
    }

    /// Account name to look up.
    #[must_use]
    pub const fn owner(&self) -> &str {
        self.owner.as_str()
    }

    /// Team slug, when one was given.
    #[must_use]
    pub fn team_slug(&self) -> Option<&str> {
        self.team_slug.as_deref()
    }
}

/// Owner after a successful directory lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerInfo {
    /// Account name.
    pub owner: String,
    /// Team slug. Only ever set for organizations.
    pub team_slug: Option<String>,
    /// Account kind reported by GitHub.
    pub owner_type: OwnerKind,
}

/// Resolves `raw` into an [`OwnerInfo`] using the directory.
///
/// # Errors
///
/// Returns [`FetchError::OwnerNotFound`] when the directory has no such
/// account, [`FetchError::InvalidTeamContext`] when a team was given for a
/// non-organization, and passes any other directory error through unchanged.
pub async fn resolve_owner<D>(directory: &D, raw: &str) -> Result<OwnerInfo, FetchError>
where
    D: RepositoryDirectory + ?Sized,
{
    let spec = OwnerSpec::parse(raw);
    // "/team" names no account, so there is nothing to look up.
    if spec.owner.is_empty() {
        return Err(FetchError::OwnerNotFound { owner: spec.owner });
    }

    let Some(owner_type) = directory.lookup_owner(spec.owner()).await? else {
        return Err(FetchError::OwnerNotFound {
            owner: spec.owner,
        });
    };

    if spec.team_slug.is_some() && !owner_type.is_organization() {
        return Err(FetchError::InvalidTeamContext);
    }

    debug!(
        owner = spec.owner(),
        team = spec.team_slug(),
        kind = ?owner_type,
        "resolved repository owner"
    );

    Ok(OwnerInfo {
        owner: spec.owner,
        team_slug: spec.team_slug,
        owner_type,
    })
}
