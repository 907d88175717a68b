//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::PopcornConfig;
use crate::catalog::CatalogError;

#[rstest]
fn defaults_are_valid() {
    assert_eq!(PopcornConfig::default().validate(), Ok(()));
}

#[rstest]
#[case::zero_sample_size(PopcornConfig { sample_size: 0, ..Default::default() })]
#[case::zero_max_page(PopcornConfig { max_page: 0, ..Default::default() })]
#[case::zero_start_page(PopcornConfig { start_page: 0, ..Default::default() })]
#[case::start_beyond_max(PopcornConfig { start_page: 11, max_page: 10, ..Default::default() })]
#[case::zero_timeout(PopcornConfig { request_timeout_seconds: Some(0), ..Default::default() })]
#[case::blank_language(PopcornConfig { language: " ".to_owned(), ..Default::default() })]
fn rejects_inconsistent_values(#[case] config: PopcornConfig) {
    let result = config.validate();

    assert!(
        matches!(result, Err(CatalogError::Configuration { .. })),
        "expected configuration error, got {result:?}"
    );
}

#[rstest]
fn rejects_unknown_removal_control() {
    let config = PopcornConfig {
        removal_control: "slider".to_owned(),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(CatalogError::Configuration { .. })
    ));
}

#[rstest]
#[case::api_base("ftp://example.com", "https://image.tmdb.org/t/p/w200")]
#[case::image_base("https://api.themoviedb.org/3", "not a url")]
fn rejects_malformed_urls(#[case] api_base_url: &str, #[case] image_base_url: &str) {
    let config = PopcornConfig {
        api_base_url: api_base_url.to_owned(),
        image_base_url: image_base_url.to_owned(),
        ..Default::default()
    };

    assert!(matches!(config.validate(), Err(CatalogError::InvalidUrl(_))));
}
