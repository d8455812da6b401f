//! Authentication token and API base helpers.

use url::Url;

use super::error::FetchError;

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Personal access token with surrounding whitespace removed.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Trims `token`, returning `None` when nothing is left.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let trimmed = token.as_ref().trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Validates an API base URL, defaulting to the public GitHub API.
///
/// GitHub Enterprise hosts may be given as the bare host URL; their REST
/// API lives under `/api/v3`.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] when the value is not an absolute
/// http(s) URL.
pub fn resolve_api_base(api_url: Option<&str>) -> Result<Url, FetchError> {
    let raw = api_url.map_or(DEFAULT_API_BASE, str::trim);
    let mut url = Url::parse(raw).map_err(|error| FetchError::InvalidUrl(error.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{scheme}'",
            scheme = url.scheme()
        )));
    }

    let is_public_github = url
        .host_str()
        .is_some_and(|host| host.eq_ignore_ascii_case("github.com"));
    if is_public_github {
        return Url::parse(DEFAULT_API_BASE)
            .map_err(|error| FetchError::InvalidUrl(error.to_string()));
    }

    let is_enterprise_host = url.path() == "/"
        && url
            .host_str()
            .is_some_and(|host| !host.eq_ignore_ascii_case("api.github.com"));
    if is_enterprise_host {
        url.set_path("api/v3");
    }
    Ok(url)
}
