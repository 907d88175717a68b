//! Tests for building catalog and widget settings from configuration.

use std::time::Duration;

use rstest::rstest;

use crate::PopcornConfig;
use crate::catalog::CatalogError;
use crate::tui::components::RemovalControl;
use crate::tui::state::RefetchPolicy;

#[rstest]
fn catalog_settings_carry_connection_values() {
    let config = PopcornConfig {
        api_key: Some("abc".to_owned()),
        api_base_url: "http://localhost:9000/3/".to_owned(),
        language: "en-US".to_owned(),
        request_timeout_seconds: Some(5),
        ..Default::default()
    };

    let settings = config
        .catalog_settings()
        .expect("settings should build with a key");

    assert_eq!(settings.api_key.value(), "abc");
    assert_eq!(settings.language, "en-US");
    assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    assert_eq!(
        settings.popular_endpoint(),
        "http://localhost:9000/3/movie/popular"
    );
}

#[rstest]
fn catalog_settings_require_a_key() {
    let _guard = env_lock::lock_env([("TMDB_API_KEY", None::<&str>)]);

    assert_eq!(
        PopcornConfig::default().catalog_settings(),
        Err(CatalogError::MissingApiKey)
    );
}

#[rstest]
fn widget_settings_carry_behaviour_values() {
    let config = PopcornConfig {
        sample_size: 3,
        removal_delay_ms: 120,
        removal_control: "checkbox".to_owned(),
        start_page: 2,
        max_page: 40,
        seed: Some(17),
        ..Default::default()
    };

    let settings = config
        .widget_settings()
        .expect("settings should build");

    assert_eq!(settings.sample_size, 3);
    assert_eq!(settings.removal_delay, Duration::from_millis(120));
    assert_eq!(settings.control, RemovalControl::Checkbox);
    assert_eq!(settings.refetch, RefetchPolicy::new(40));
    assert_eq!(settings.start_page, 2);
    assert_eq!(settings.seed, Some(17));
}
