//! Error types exposed by the repository fetcher.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while resolving an owner or listing its repositories.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The options did not name an owner.
    #[error("'owner' parameter is required")]
    MissingOwner,

    /// GitHub has no user or organization with the requested name.
    #[error("The user/org '{owner}' could not be found")]
    OwnerNotFound {
        /// Owner name exactly as it was looked up.
        owner: String,
    },

    /// A team slug was supplied for an account that is not an organization.
    #[error("The provided 'owner' is not an organization, and so can not have teams")]
    InvalidTeamContext,

    /// An option value could not be interpreted.
    #[error("invalid value for '{option}': {value}")]
    InvalidOption {
        /// Name of the option that was rejected.
        option: &'static str,
        /// The value as supplied by the caller.
        value: String,
    },

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be fetched after the failure.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
