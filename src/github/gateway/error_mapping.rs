//! Maps Octocrab failures onto [`FetchError`].

use http::StatusCode;

use crate::github::error::FetchError;

const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn is_not_found(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::GitHub { source, .. } if source.status_code == StatusCode::NOT_FOUND
    )
}

const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Rate limits arrive as 403 or 429 with a message or documentation URL
/// mentioning the limit; a plain 403 is a permissions problem.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> FetchError {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code;
            let message = &source.message;
            if is_auth_failure(status) {
                FetchError::Authentication {
                    message: format!("{operation} failed: GitHub returned {status} {message}"),
                }
            } else {
                FetchError::Api {
                    message: format!("{operation} failed with status {status}: {message}"),
                }
            }
        }
        _ if is_network_error(error) => FetchError::Network {
            message: format!("{operation} failed: {error}"),
        },
        _ => FetchError::Api {
            message: format!("{operation} failed: {error}"),
        },
    }
}
