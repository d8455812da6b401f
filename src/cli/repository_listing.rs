//! Repository listing operation.

use std::io::{self, Write};

use fetch_all_repos::github::{PersonalAccessToken, build_octocrab_client};
use fetch_all_repos::{
    FetchAllReposConfig, FetchError, OctocrabRepositoryDirectory, RepositoryDirectory,
    RepositoryFetcher,
};
use url::Url;

use super::output::{write_repository_json, write_repository_names};

/// Fetches and prints the configured owner's repositories.
///
/// # Errors
///
/// Returns configuration, resolution, or GitHub errors from the fetcher.
pub async fn run(config: &FetchAllReposConfig) -> Result<(), FetchError> {
    let mut stdout = io::stdout().lock();
    run_with_directory_builder(config, build_directory, &mut stdout).await
}

fn build_directory(
    token: Option<&PersonalAccessToken>,
    api_base: &Url,
) -> Result<OctocrabRepositoryDirectory, FetchError> {
    let client = build_octocrab_client(token, api_base.as_str())?;
    Ok(OctocrabRepositoryDirectory::new(client))
}

/// Fetches and prints repositories using a custom directory builder.
///
/// This function is exposed for testing with mock directories.
pub async fn run_with_directory_builder<D, F, W>(
    config: &FetchAllReposConfig,
    build: F,
    writer: &mut W,
) -> Result<(), FetchError>
where
    D: RepositoryDirectory,
    F: FnOnce(Option<&PersonalAccessToken>, &Url) -> Result<D, FetchError>,
    W: Write,
{
    let options = config.fetch_options()?;
    let api_base = config.api_base()?;
    let token = config.resolve_token();

    let directory = build(token.as_ref(), &api_base)?;
    let repositories = RepositoryFetcher::new(&directory)
        .fetch_all(&options)
        .await?;

    if config.json {
        write_repository_json(writer, &repositories)
    } else {
        write_repository_names(writer, &repositories)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use fetch_all_repos::github::{
        ListingRoute, OwnerKind, PersonalAccessToken, RepositoryFilter,
    };
    use fetch_all_repos::{
        FetchAllReposConfig, FetchError, RepositoryDirectory, RepositoryRecord,
    };
    use serde_json::json;
    use url::Url;

    use super::run_with_directory_builder;

    #[derive(Clone, Default)]
    struct CapturingDirectory {
        routes: Arc<Mutex<Vec<ListingRoute>>>,
    }

    #[async_trait]
    impl RepositoryDirectory for CapturingDirectory {
        async fn lookup_owner(&self, _name: &str) -> Result<Option<OwnerKind>, FetchError> {
            Ok(Some(OwnerKind::Organization))
        }

        async fn list_repositories(
            &self,
            route: &ListingRoute,
            filter: &RepositoryFilter,
        ) -> Result<Vec<RepositoryRecord>, FetchError> {
            self.routes
                .lock()
                .expect("routes mutex should be available")
                .push(route.clone());

            Ok(filter.retain_page(vec![
                RepositoryRecord::from_value(json!({ "full_name": "octo-org/api", "fork": false })),
                RepositoryRecord::from_value(json!({ "full_name": "octo-org/fork", "fork": true })),
            ]))
        }
    }

    #[tokio::test]
    async fn lists_team_repositories_and_writes_names() {
        let config = FetchAllReposConfig {
            owner: Some("octo-org/platform".to_owned()),
            token: Some("ghp_example".to_owned()),
            api_url: Some("https://ghe.example.com".to_owned()),
            exclude_forks: true,
            ..Default::default()
        };
        let directory = CapturingDirectory::default();
        let routes = Arc::clone(&directory.routes);
        let captured: Arc<Mutex<Option<(Option<String>, String)>>> = Arc::default();
        let captured_in_builder = Arc::clone(&captured);

        let mut buffer = Vec::new();
        run_with_directory_builder(
            &config,
            move |token: Option<&PersonalAccessToken>, api_base: &Url| {
                captured_in_builder
                    .lock()
                    .expect("captured mutex should be available")
                    .replace((
                        token.map(|value| value.value().to_owned()),
                        api_base.to_string(),
                    ));
                Ok(directory)
            },
            &mut buffer,
        )
        .await
        .expect("listing should succeed");

        assert_eq!(
            String::from_utf8(buffer).expect("output should be UTF-8"),
            "octo-org/api\n"
        );
        assert_eq!(
            routes.lock().expect("routes mutex should be available").as_slice(),
            [ListingRoute::Team {
                org: "octo-org".to_owned(),
                team_slug: "platform".to_owned(),
            }]
        );
        assert_eq!(
            captured
                .lock()
                .expect("captured mutex should be available")
                .clone(),
            Some((
                Some("ghp_example".to_owned()),
                "https://ghe.example.com/api/v3".to_owned()
            ))
        );
    }

    #[tokio::test]
    async fn missing_owner_fails_without_writing_output() {
        let config = FetchAllReposConfig::default();
        let mut buffer = Vec::new();

        let error = run_with_directory_builder(
            &config,
            |_: Option<&PersonalAccessToken>, _: &Url| Ok(CapturingDirectory::default()),
            &mut buffer,
        )
        .await
        .expect_err("missing owner should fail");

        assert_eq!(error, FetchError::MissingOwner);
        assert!(buffer.is_empty(), "nothing should be written on failure");
    }
}
