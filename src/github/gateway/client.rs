//! Octocrab client construction.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::FetchError;
use crate::github::token::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for `api_base`, authenticated when a token is
/// given.
///
/// Without a token GitHub omits `permissions` from repository payloads, so
/// only `pull` access can be checked.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] when the base URI cannot be parsed or
/// [`FetchError::Api`] when Octocrab fails to construct a client.
pub fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
) -> Result<Octocrab, FetchError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| FetchError::InvalidUrl(error.to_string()))?;

    let mut builder = Octocrab::builder();
    if let Some(personal_token) = token {
        builder = builder.personal_token(personal_token.value());
    }

    builder
        .base_uri(base_uri)
        .map_err(|error| FetchError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
