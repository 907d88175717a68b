//! Tests for field resolution methods (`resolve_api_key`, `removal_control`,
//! `log_file_path`).

use rstest::rstest;

use crate::PopcornConfig;
use crate::catalog::CatalogError;
use crate::tui::components::RemovalControl;

#[rstest]
fn resolve_api_key_returns_configured_value() {
    let _guard = env_lock::lock_env([("TMDB_API_KEY", Some("env-key"))]);
    let config = PopcornConfig {
        api_key: Some("config-key".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_api_key().map(|key| key.value().to_owned()),
        Ok("config-key".to_owned()),
        "configured key should win over TMDB_API_KEY"
    );
}

#[rstest]
fn resolve_api_key_falls_back_to_tmdb_env() {
    let _guard = env_lock::lock_env([("TMDB_API_KEY", Some("env-key"))]);
    let config = PopcornConfig::default();

    assert_eq!(
        config.resolve_api_key().map(|key| key.value().to_owned()),
        Ok("env-key".to_owned())
    );
}

#[rstest]
fn blank_configured_key_falls_back_to_tmdb_env() {
    let _guard = env_lock::lock_env([("TMDB_API_KEY", Some("env-key"))]);
    let config = PopcornConfig {
        api_key: Some("   ".to_owned()),
        ..Default::default()
    };

    assert!(config.resolve_api_key().is_ok());
}

#[rstest]
fn resolve_api_key_errors_when_absent() {
    let _guard = env_lock::lock_env([("TMDB_API_KEY", None::<&str>)]);
    let config = PopcornConfig::default();

    assert_eq!(config.resolve_api_key(), Err(CatalogError::MissingApiKey));
}

#[rstest]
#[case("button", RemovalControl::Button)]
#[case("Checkbox", RemovalControl::Checkbox)]
fn removal_control_parses_known_variants(#[case] raw: &str, #[case] expected: RemovalControl) {
    let config = PopcornConfig {
        removal_control: raw.to_owned(),
        ..Default::default()
    };

    assert_eq!(config.removal_control(), Ok(expected));
}

#[rstest]
#[case::unset(None, None)]
#[case::blank(Some("  "), None)]
#[case::set(Some("popcorn.log"), Some("popcorn.log"))]
fn log_file_path_ignores_blank_values(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
    let config = PopcornConfig {
        log_file: raw.map(str::to_owned),
        ..Default::default()
    };

    assert_eq!(config.log_file_path().map(|path| path.as_str()), expected);
}
