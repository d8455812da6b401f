//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach, lowest to highest
//! precedence:
//!
//! 1. **Defaults** – built-in application defaults
//! 2. **Configuration file** – `.fetch-all-repos.toml` in the current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `FETCH_ALL_REPOS_OWNER`,
//!    `FETCH_ALL_REPOS_TOKEN`, or the legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--owner`/`-o`, `--token`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! owner = "octo-org/platform"
//! token = "ghp_example"
//! api_url = "https://ghe.example.com"
//! visibility = "private"
//! minimum_access = "push"
//! exclude_forks = true
//! include_archived = false
//! include_templates = false
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::FetchError;
use crate::github::options::{AccessLevel, FetchOptions, Visibility};
use crate::github::token::{PersonalAccessToken, resolve_api_base};

/// Configuration for the `fetch-all-repos` command.
///
/// # Example
///
/// ```no_run
/// use fetch_all_repos::FetchAllReposConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = FetchAllReposConfig::load().expect("failed to load configuration");
/// let options = config.fetch_options().expect("options should be valid");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FETCH_ALL_REPOS",
    discovery(
        dotfile_name = ".fetch-all-repos.toml",
        config_file_name = "fetch-all-repos.toml",
        app_name = "fetch-all-repos"
    )
)]
pub struct FetchAllReposConfig {
    /// User or organization whose repositories to list, optionally with a
    /// team (`org/team`).
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `FETCH_ALL_REPOS_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Personal access token. Without one, GitHub omits permission data and
    /// only public repositories are visible.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `FETCH_ALL_REPOS_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GitHub API base URL. Defaults to `https://api.github.com`; a bare
    /// GitHub Enterprise host gains the `/api/v3` suffix.
    pub api_url: Option<String>,

    /// `all`, `public` or `private`. Defaults to `all`.
    pub visibility: Option<String>,

    /// `pull`, `push` or `admin`, case-insensitive. Defaults to `pull`.
    pub minimum_access: Option<String>,

    /// Drops forked repositories.
    ///
    /// Note: booleans are not loaded from the environment by `ortho_config`.
    pub exclude_forks: bool,

    /// Keeps archived repositories.
    pub include_archived: bool,

    /// Keeps template repositories.
    pub include_templates: bool,

    /// Prints the raw repository records as a JSON array.
    pub json: bool,
}

impl FetchAllReposConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable. Blank tokens count as absent.
    #[must_use]
    pub fn resolve_token(&self) -> Option<PersonalAccessToken> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .and_then(PersonalAccessToken::new)
    }

    /// Returns the validated API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] when `api_url` is not an absolute
    /// http(s) URL.
    pub fn api_base(&self) -> Result<Url, FetchError> {
        resolve_api_base(self.api_url.as_deref())
    }

    /// Converts the configuration into fetcher options.
    ///
    /// The owner is passed through as-is; a missing owner is reported by the
    /// fetcher itself.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidOption`] when `visibility` is not one of
    /// `all`, `public` or `private`.
    pub fn fetch_options(&self) -> Result<FetchOptions, FetchError> {
        let visibility = self
            .visibility
            .as_deref()
            .map(str::parse::<Visibility>)
            .transpose()?
            .unwrap_or_default();
        let minimum_access = self
            .minimum_access
            .as_deref()
            .map(AccessLevel::parse)
            .unwrap_or_default();

        Ok(FetchOptions {
            owner: self.owner.clone(),
            visibility,
            minimum_access,
            include_forks: !self.exclude_forks,
            include_archived: self.include_archived,
            include_templates: self.include_templates,
        })
    }
}

#[cfg(test)]
mod tests;
