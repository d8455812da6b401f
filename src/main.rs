//! `fetch-all-repos` CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use fetch_all_repos::{FetchAllReposConfig, FetchError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FetchError> {
    let config = load_config()?;
    cli::repository_listing::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<FetchAllReposConfig, FetchError> {
    FetchAllReposConfig::load().map_err(|error| FetchError::Configuration {
        message: error.to_string(),
    })
}
