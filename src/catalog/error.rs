//! Error types exposed by the catalog layer.

use thiserror::Error;

/// Errors surfaced while configuring the widget or talking to the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No API key was configured.
    #[error("catalog API key is required (use --api-key, POPCORN_API_KEY, or TMDB_API_KEY)")]
    MissingApiKey,

    /// A configured URL could not be parsed.
    #[error("catalog URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed before a response arrived.
    #[error("network error talking to the catalog: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The catalog answered with a non-success HTTP status.
    #[error("catalog returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Status message or response body excerpt.
        message: String,
    },

    /// The response body was not the expected JSON envelope.
    #[error("catalog response could not be decoded: {message}")]
    Parse {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The terminal interface failed to start or crashed.
    #[error("terminal interface error: {message}")]
    Interface {
        /// Error detail from the TUI runtime.
        message: String,
    },
}

/// Coarse classification of a failed fetch, recorded in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Non-success status or the request never completed.
    FetchFailure,
    /// The body was not the expected JSON shape.
    ParseFailure,
}

impl CatalogError {
    /// Classifies the error for diagnostics.
    ///
    /// Only [`CatalogError::Parse`] counts as a parse failure; everything else
    /// that can end a fetch is a fetch failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Parse { .. } => FailureKind::ParseFailure,
            _ => FailureKind::FetchFailure,
        }
    }
}
