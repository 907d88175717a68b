//! Popular-movies catalog access.
//!
//! This module talks to the TMDB v3 `movie/popular` endpoint, decodes the
//! JSON envelope into [`Movie`] values, and maps transport, status, and
//! decoding problems into [`CatalogError`] variants so callers can log the
//! detail while showing users a single generic message.

pub mod error;
pub mod gateway;
pub mod models;
pub mod poster;
pub mod settings;

pub use error::{CatalogError, FailureKind};
pub use gateway::{CatalogGateway, TmdbGateway};
pub use models::{Movie, PopularPage};
pub use poster::{PLACEHOLDER_POSTER_URL, poster_url};
pub use settings::{ApiKey, CatalogSettings};

#[cfg(test)]
pub use gateway::MockCatalogGateway;
