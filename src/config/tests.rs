//! Unit tests for configuration loading and conversion.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use crate::FetchAllReposConfig;
use crate::github::error::FetchError;
use crate::github::options::{AccessLevel, FetchOptions, Visibility};

fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

fn build_config_from_layers(layers: Vec<(&str, Value)>) -> FetchAllReposConfig {
    let mut composer = MergeComposer::new();
    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }
    FetchAllReposConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"owner": "default-org"})), ("file", json!({"owner": "file-org"}))],
    "file-org"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"owner": "file-org"})), ("environment", json!({"owner": "env-org"}))],
    "env-org"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"owner": "env-org"})), ("cli", json!({"owner": "cli-org"}))],
    "cli-org"
)]
fn owner_follows_layer_precedence(#[case] layers: Vec<(&str, Value)>, #[case] expected: &str) {
    let config = build_config_from_layers(layers);
    assert_eq!(config.owner.as_deref(), Some(expected));
}

#[rstest]
fn file_layer_sets_filters() {
    let config = build_config_from_layers(vec![(
        "file",
        json!({
            "owner": "octo-org/platform",
            "visibility": "private",
            "minimum_access": "Admin",
            "exclude_forks": true,
            "include_archived": true,
            "include_templates": true
        }),
    )]);

    let options = config.fetch_options().expect("options should convert");

    assert_eq!(
        options,
        FetchOptions {
            owner: Some("octo-org/platform".to_owned()),
            visibility: Visibility::Private,
            minimum_access: AccessLevel::Admin,
            include_forks: false,
            include_archived: true,
            include_templates: true,
        }
    );
}

#[rstest]
fn empty_config_yields_default_options() {
    let options = FetchAllReposConfig::default()
        .fetch_options()
        .expect("options should convert");

    assert_eq!(options, FetchOptions::default());
}

#[rstest]
fn invalid_visibility_is_rejected() {
    let config = FetchAllReposConfig {
        owner: Some("mheap".to_owned()),
        visibility: Some("internal".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.fetch_options(),
        Err(FetchError::InvalidOption {
            option: "visibility",
            value: "internal".to_owned(),
        })
    );
}

#[rstest]
fn resolve_token_prefers_configured_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = FetchAllReposConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    let token = config.resolve_token().expect("token should resolve");
    assert_eq!(token.value(), "my-token");
}

#[rstest]
fn resolve_token_falls_back_to_github_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = FetchAllReposConfig::default();

    let token = config.resolve_token().expect("legacy token should resolve");
    assert_eq!(token.value(), "legacy-token");
}

#[rstest]
fn resolve_token_is_optional() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = FetchAllReposConfig {
        token: Some("   ".to_owned()),
        ..Default::default()
    };

    assert!(config.resolve_token().is_none(), "blank token should be absent");
}

#[rstest]
fn api_base_defaults_to_public_github() {
    let base = FetchAllReposConfig::default()
        .api_base()
        .expect("default API base should resolve");

    assert_eq!(base.as_str(), "https://api.github.com/");
}
