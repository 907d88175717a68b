//! Data models for the popular-movies envelope returned by the catalog.

use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// One catalog record as returned by the popular-movies endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Catalog identifier, stable across pages within a session.
    pub id: u64,
    /// Display title.
    pub title: Option<String>,
    /// Poster path relative to the image base URL, when the catalog has one.
    pub poster_path: Option<String>,
    /// Average vote on a 0.0 to 10.0 scale, passed through unvalidated.
    pub vote_average: f64,
    /// Plot synopsis.
    pub overview: Option<String>,
}

impl Movie {
    /// Returns the title, or a fixed fallback when the catalog omitted it.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}

/// One page of popular movies.
#[derive(Debug, Clone, PartialEq)]
pub struct PopularPage {
    /// Page number echoed by the catalog.
    pub page: Option<u32>,
    /// Total number of pages the catalog is willing to serve.
    pub total_pages: Option<u32>,
    /// Movies on this page, in catalog order.
    pub results: Vec<Movie>,
}

impl PopularPage {
    /// Builds a page from bare results, without pagination metadata.
    #[must_use]
    pub const fn from_results(results: Vec<Movie>) -> Self {
        Self {
            page: None,
            total_pages: None,
            results,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPopularPage {
    #[serde(default)]
    pub(super) page: Option<u32>,
    #[serde(default)]
    pub(super) total_pages: Option<u32>,
    pub(super) results: Vec<ApiMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiMovie {
    pub(super) id: u64,
    #[serde(default)]
    pub(super) title: Option<String>,
    #[serde(default)]
    pub(super) poster_path: Option<String>,
    pub(super) vote_average: f64,
    #[serde(default)]
    pub(super) overview: Option<String>,
}

impl From<ApiMovie> for Movie {
    fn from(value: ApiMovie) -> Self {
        Self {
            id: value.id,
            title: value.title,
            poster_path: value.poster_path,
            vote_average: value.vote_average,
            overview: value.overview.filter(|text| !text.trim().is_empty()),
        }
    }
}

impl From<ApiPopularPage> for PopularPage {
    fn from(value: ApiPopularPage) -> Self {
        Self {
            page: value.page,
            total_pages: value.total_pages,
            results: value.results.into_iter().map(Movie::from).collect(),
        }
    }
}
