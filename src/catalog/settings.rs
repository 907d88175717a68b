//! Connection settings for the catalog gateway.

use std::fmt;
use std::time::Duration;

use url::Url;

use super::error::CatalogError;

/// Default TMDB v3 API base.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Default poster base, sized for list thumbnails.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w200";
/// Default `language` query parameter.
pub const DEFAULT_LANGUAGE: &str = "es-ES";

/// TMDB v3 API key.
///
/// The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates that the key is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingApiKey`] when the supplied string is blank.
    pub fn new(key: impl AsRef<str>) -> Result<Self, CatalogError> {
        let trimmed = key.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CatalogError::MissingApiKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the key value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Everything the gateway needs to build requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// API base URL, e.g. `https://api.themoviedb.org/3`.
    pub api_base: Url,
    /// Poster base URL, e.g. `https://image.tmdb.org/t/p/w200`.
    pub image_base: String,
    /// Locale sent as the `language` query parameter.
    pub language: String,
    /// Credential sent as the `api_key` query parameter.
    pub api_key: ApiKey,
    /// Optional HTTP timeout. `None` waits for the catalog indefinitely.
    pub timeout: Option<Duration>,
}

impl CatalogSettings {
    /// Builds settings for the public TMDB endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] if the built-in base URL fails to
    /// parse, which only happens if the constant is edited incorrectly.
    pub fn tmdb(api_key: ApiKey) -> Result<Self, CatalogError> {
        Ok(Self {
            api_base: parse_base_url(DEFAULT_API_BASE_URL)?,
            image_base: DEFAULT_IMAGE_BASE_URL.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
            api_key,
            timeout: None,
        })
    }

    /// Returns the popular-movies endpoint under the configured base.
    #[must_use]
    pub fn popular_endpoint(&self) -> String {
        format!(
            "{}/movie/popular",
            self.api_base.as_str().trim_end_matches('/')
        )
    }
}

/// Parses and validates an HTTP(S) base URL.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidUrl`] when the value is not an absolute
/// `http` or `https` URL.
pub fn parse_base_url(raw: &str) -> Result<Url, CatalogError> {
    let url = Url::parse(raw.trim())
        .map_err(|error| CatalogError::InvalidUrl(format!("{raw}: {error}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::InvalidUrl(format!(
            "{raw}: unsupported scheme {other}"
        ))),
    }
}
