//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults**: built-in application defaults
//! 2. **Configuration file**: `.popcorn.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables**: `POPCORN_API_KEY`, `POPCORN_LANGUAGE`, and
//!    so on, plus the conventional `TMDB_API_KEY` as a key fallback
//! 4. **Command-line arguments**: `--api-key`/`-k`, `--language`/`-l`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_key = "0123456789abcdef"
//! language = "en-US"
//! removal_control = "checkbox"
//! removal_delay_ms = 500
//! seed = 42
//! log_file = "popcorn.log"
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::settings::{
    DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_LANGUAGE, parse_base_url,
};
use crate::catalog::{ApiKey, CatalogError, CatalogSettings};
use crate::sampler::DEFAULT_SAMPLE_SIZE;
use crate::tui::WidgetSettings;
use crate::tui::components::RemovalControl;
use crate::tui::state::{DEFAULT_MAX_PAGE, RefetchPolicy};

/// Environment variable consulted when no API key is configured.
pub const TMDB_API_KEY_ENV: &str = "TMDB_API_KEY";

const DEFAULT_REMOVAL_DELAY_MS: u64 = 500;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use popcorn::PopcornConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = PopcornConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// let catalog = config.catalog_settings().expect("API key required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "POPCORN",
    discovery(
        dotfile_name = ".popcorn.toml",
        config_file_name = "popcorn.toml",
        app_name = "popcorn"
    )
)]
pub struct PopcornConfig {
    /// TMDB v3 API key.
    ///
    /// Can be provided via:
    /// - CLI: `--api-key <KEY>` or `-k <KEY>`
    /// - Environment: `POPCORN_API_KEY` or `TMDB_API_KEY`
    /// - Config file: `api_key = "..."`
    #[ortho_config(cli_short = 'k')]
    pub api_key: Option<String>,

    /// Catalog API base URL.
    #[ortho_config()]
    pub api_base_url: String,

    /// Prefix prepended to poster paths.
    #[ortho_config()]
    pub image_base_url: String,

    /// Locale sent as the `language` query parameter.
    #[ortho_config(cli_short = 'l')]
    pub language: String,

    /// Number of movies kept from each page.
    #[ortho_config(cli_short = 'n')]
    pub sample_size: usize,

    /// Delay in milliseconds between flagging a movie and removing it.
    #[ortho_config()]
    pub removal_delay_ms: u64,

    /// Removal control variant: `button` or `checkbox`.
    #[ortho_config(cli_short = 'c')]
    pub removal_control: String,

    /// Page requested when the widget mounts.
    #[ortho_config(cli_short = 'p')]
    pub start_page: u32,

    /// Highest page the empty-list refetch may request.
    #[ortho_config()]
    pub max_page: u32,

    /// HTTP timeout in seconds. Unset means no timeout.
    #[ortho_config()]
    pub request_timeout_seconds: Option<u64>,

    /// Seed for the sampler, for reproducible selections.
    #[ortho_config(cli_short = 's')]
    pub seed: Option<u64>,

    /// File receiving diagnostic logs. Unset discards them.
    #[ortho_config()]
    pub log_file: Option<String>,
}

impl Default for PopcornConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            removal_delay_ms: DEFAULT_REMOVAL_DELAY_MS,
            removal_control: RemovalControl::default().as_str().to_owned(),
            start_page: 1,
            max_page: DEFAULT_MAX_PAGE,
            request_timeout_seconds: None,
            seed: None,
            log_file: None,
        }
    }
}

impl PopcornConfig {
    /// Resolves the API key from configuration or `TMDB_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingApiKey`] when no source provides a
    /// non-blank value.
    pub fn resolve_api_key(&self) -> Result<ApiKey, CatalogError> {
        let raw = self
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| env::var(TMDB_API_KEY_ENV).ok())
            .ok_or(CatalogError::MissingApiKey)?;
        ApiKey::new(raw)
    }

    /// Parses the configured removal control.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] for unknown variants.
    pub fn removal_control(&self) -> Result<RemovalControl, CatalogError> {
        self.removal_control.parse()
    }

    /// Returns the log file path, if one is configured.
    #[must_use]
    pub fn log_file_path(&self) -> Option<&Utf8Path> {
        self.log_file
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(Utf8Path::new)
    }

    /// Checks that the configured values are mutually consistent.
    ///
    /// The API key is not checked here; see [`Self::resolve_api_key`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] for malformed base URLs and
    /// [`CatalogError::Configuration`] for any other invalid value.
    pub fn validate(&self) -> Result<(), CatalogError> {
        parse_base_url(&self.api_base_url)?;
        parse_base_url(&self.image_base_url)?;
        self.removal_control()?;

        if self.language.trim().is_empty() {
            return Err(configuration_error("language must not be empty"));
        }
        if self.sample_size == 0 {
            return Err(configuration_error("sample_size must be at least 1"));
        }
        if self.max_page == 0 {
            return Err(configuration_error("max_page must be at least 1"));
        }
        if self.start_page == 0 || self.start_page > self.max_page {
            return Err(configuration_error(&format!(
                "start_page must be between 1 and max_page ({})",
                self.max_page
            )));
        }
        if self.request_timeout_seconds == Some(0) {
            return Err(configuration_error(
                "request_timeout_seconds must be at least 1 when set",
            ));
        }
        Ok(())
    }

    /// Builds the gateway settings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingApiKey`] when no key is available and
    /// [`CatalogError::InvalidUrl`] for a malformed API base URL.
    pub fn catalog_settings(&self) -> Result<CatalogSettings, CatalogError> {
        Ok(CatalogSettings {
            api_base: parse_base_url(&self.api_base_url)?,
            image_base: self.image_base_url.trim().to_owned(),
            language: self.language.trim().to_owned(),
            api_key: self.resolve_api_key()?,
            timeout: self.request_timeout_seconds.map(Duration::from_secs),
        })
    }

    /// Builds the widget's behavioural settings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] for an unknown removal
    /// control.
    pub fn widget_settings(&self) -> Result<WidgetSettings, CatalogError> {
        Ok(WidgetSettings {
            image_base: self.image_base_url.trim().to_owned(),
            sample_size: self.sample_size,
            removal_delay: Duration::from_millis(self.removal_delay_ms),
            control: self.removal_control()?,
            refetch: RefetchPolicy::new(self.max_page),
            start_page: self.start_page,
            seed: self.seed,
        })
    }
}

fn configuration_error(message: &str) -> CatalogError {
    CatalogError::Configuration {
        message: message.to_owned(),
    }
}

#[cfg(test)]
mod tests;
