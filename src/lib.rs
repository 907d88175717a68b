//! Popcorn library crate providing a popular-movies terminal widget.
//!
//! The library fetches a page of popular movies from TMDB, samples a handful
//! of them at random, and renders them as dismissible cards with a five-star
//! rating. When every card has been dismissed the next page is loaded.

pub mod catalog;
pub mod config;
pub mod sampler;
pub mod telemetry;
pub mod tui;

pub use catalog::{
    ApiKey, CatalogError, CatalogGateway, CatalogSettings, FailureKind, Movie, PopularPage,
    TmdbGateway,
};
pub use config::PopcornConfig;
pub use sampler::MovieSampler;
