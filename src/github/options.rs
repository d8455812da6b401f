//! Options accepted by the repository fetcher.

use std::fmt;
use std::str::FromStr;

use super::error::FetchError;

/// Which repositories to keep based on their visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Public and private repositories.
    #[default]
    All,
    /// Only public repositories.
    Public,
    /// Only private repositories.
    Private,
}

impl Visibility {
    /// Returns the option value for this visibility.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl FromStr for Visibility {
    type Err = FetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            _ => Err(FetchError::InvalidOption {
                option: "visibility",
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Lowest permission the caller must hold on a repository to keep it.
///
/// Levels are compared by name against the `permissions` object GitHub
/// returns, so an unrecognised level is kept (lowercased) rather than
/// rejected; it simply never matches a permission key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccessLevel {
    /// Read access. Satisfied by any visible repository.
    #[default]
    Pull,
    /// Write access.
    Push,
    /// Administrative access.
    Admin,
    /// A level name GitHub does not document for `permissions`.
    Other(String),
}

impl AccessLevel {
    /// Parses a level name case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let lowered = value.to_lowercase();
        match lowered.as_str() {
            "pull" => Self::Pull,
            "push" => Self::Push,
            "admin" => Self::Admin,
            _ => Self::Other(lowered),
        }
    }

    /// Returns the `permissions` key for this level.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Admin => "admin",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Returns true for the weakest level, which unauthenticated listings
    /// satisfy implicitly.
    #[must_use]
    pub const fn is_pull(&self) -> bool {
        matches!(self, Self::Pull)
    }
}

impl From<&str> for AccessLevel {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Options for a single "fetch all repositories" call.
///
/// Visibility is a closed set: parsing anything other than `all`, `public`
/// or `private` fails with [`FetchError::InvalidOption`] before any request
/// is made, instead of silently disabling the visibility filter.
///
/// # Example
///
/// ```
/// use fetch_all_repos::github::{AccessLevel, FetchOptions, Visibility};
///
/// let options = FetchOptions::for_owner("octo-org/platform")
///     .with_visibility(Visibility::Private)
///     .with_minimum_access("ADMIN");
/// assert_eq!(options.minimum_access, AccessLevel::Admin);
/// assert!(options.include_forks);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// User or organization name, optionally followed by `/team-slug`.
    pub owner: Option<String>,
    /// Visibility filter. Defaults to all. See [`Visibility`] for the
    /// accepted values.
    pub visibility: Visibility,
    /// Minimum permission required. Defaults to pull.
    pub minimum_access: AccessLevel,
    /// Keep forks. Defaults to true.
    pub include_forks: bool,
    /// Keep archived repositories. Defaults to false.
    pub include_archived: bool,
    /// Keep template repositories. Defaults to false.
    pub include_templates: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            owner: None,
            visibility: Visibility::All,
            minimum_access: AccessLevel::Pull,
            include_forks: true,
            include_archived: false,
            include_templates: false,
        }
    }
}

impl FetchOptions {
    /// Default options for the given owner.
    #[must_use]
    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
            ..Self::default()
        }
    }

    /// Sets the visibility filter.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the minimum access level, parsing it case-insensitively.
    #[must_use]
    pub fn with_minimum_access(mut self, level: impl Into<AccessLevel>) -> Self {
        self.minimum_access = level.into();
        self
    }

    /// Sets whether forks are kept.
    #[must_use]
    pub const fn with_forks(mut self, include: bool) -> Self {
        self.include_forks = include;
        self
    }

    /// Sets whether archived repositories are kept.
    #[must_use]
    pub const fn with_archived(mut self, include: bool) -> Self {
        self.include_archived = include;
        self
    }

    /// Sets whether template repositories are kept.
    #[must_use]
    pub const fn with_templates(mut self, include: bool) -> Self {
        self.include_templates = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{AccessLevel, FetchOptions, Visibility};
    use crate::github::error::FetchError;

    #[rstest]
    fn defaults_keep_forks_and_drop_archived_and_templates() {
        let options = FetchOptions::default();

        assert_eq!(options.owner, None);
        assert_eq!(options.visibility, Visibility::All);
        assert_eq!(options.minimum_access, AccessLevel::Pull);
        assert!(options.include_forks);
        assert!(!options.include_archived);
        assert!(!options.include_templates);
    }

    #[rstest]
    #[case("pull", AccessLevel::Pull)]
    #[case("PUSH", AccessLevel::Push)]
    #[case("Admin", AccessLevel::Admin)]
    #[case("ADMIN", AccessLevel::Admin)]
    #[case("Maintain", AccessLevel::Other("maintain".to_owned()))]
    fn access_level_parses_case_insensitively(#[case] input: &str, #[case] expected: AccessLevel) {
        assert_eq!(AccessLevel::parse(input), expected);
    }

    #[rstest]
    #[case("all", Visibility::All)]
    #[case("Public", Visibility::Public)]
    #[case("PRIVATE", Visibility::Private)]
    fn visibility_parses_known_values(#[case] input: &str, #[case] expected: Visibility) {
        assert_eq!(input.parse::<Visibility>(), Ok(expected));
    }

    #[rstest]
    fn visibility_rejects_unknown_values() {
        assert_eq!(
            "internal".parse::<Visibility>(),
            Err(FetchError::InvalidOption {
                option: "visibility",
                value: "internal".to_owned(),
            })
        );
    }
}
