//! Gateways for loading popular movies from the catalog.
//!
//! The trait-based design lets the widget run against mocks in tests while
//! [`TmdbGateway`] performs real HTTP requests.

use async_trait::async_trait;
use reqwest::Client;

use super::error::CatalogError;
use super::models::{ApiPopularPage, PopularPage};
use super::settings::CatalogSettings;

/// Longest response excerpt carried in a status error.
const MAX_ERROR_BODY_CHARS: usize = 160;

/// Gateway that can load one page of popular movies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch the given page (1-based) of popular movies.
    async fn popular_movies(&self, page: u32) -> Result<PopularPage, CatalogError>;
}

/// Gateway backed by the TMDB v3 REST API.
#[derive(Debug, Clone)]
pub struct TmdbGateway {
    client: Client,
    settings: CatalogSettings,
}

impl TmdbGateway {
    /// Builds a gateway with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when the HTTP client cannot be
    /// constructed (for example, when the TLS backend fails to initialise).
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|error| CatalogError::Configuration {
                message: format!("failed to configure catalog HTTP client: {error}"),
            })?;
        Ok(Self { client, settings })
    }

    /// Returns the settings the gateway was built with.
    #[must_use]
    pub const fn settings(&self) -> &CatalogSettings {
        &self.settings
    }
}

#[async_trait]
impl CatalogGateway for TmdbGateway {
    async fn popular_movies(&self, page: u32) -> Result<PopularPage, CatalogError> {
        let page_param = page.to_string();
        let query = [
            ("api_key", self.settings.api_key.value()),
            ("language", self.settings.language.as_str()),
            ("page", page_param.as_str()),
        ];

        tracing::debug!(page, "requesting popular movies");
        let response = self
            .client
            .get(self.settings.popular_endpoint())
            .query(&query)
            .send()
            .await
            .map_err(|error| CatalogError::Network {
                message: error.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| truncate_for_message(&content, MAX_ERROR_BODY_CHARS),
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: extract_status_message(&body).unwrap_or(body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| CatalogError::Network {
                message: error.without_url().to_string(),
            })?;

        serde_json::from_str::<ApiPopularPage>(&body)
            .map(PopularPage::from)
            .map_err(|error| CatalogError::Parse {
                message: error.to_string(),
            })
    }
}

/// Pulls TMDB's `status_message` out of an error body, if present.
fn extract_status_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("status_message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}
