//! Test helpers for constructing `Movie` fixtures.
//!
//! # Examples
//!
//! ```
//! use popcorn::catalog::models::test_support::{movie, numbered_movies};
//!
//! let single = movie(1, "Alien", 8.1);
//! assert_eq!(single.display_title(), "Alien");
//!
//! let page = numbered_movies(20);
//! assert_eq!(page.len(), 20);
//! ```

use super::Movie;

/// Constructs a movie with a poster path derived from its identifier.
#[must_use]
pub fn movie(id: u64, title: &str, vote_average: f64) -> Movie {
    Movie {
        id,
        title: Some(title.to_owned()),
        poster_path: Some(format!("/poster-{id}.jpg")),
        vote_average,
        overview: None,
    }
}

/// Constructs `count` distinct movies with identifiers `1..=count`.
#[must_use]
pub fn numbered_movies(count: u64) -> Vec<Movie> {
    (1..=count)
        .map(|id| movie(id, &format!("Movie {id}"), 7.0))
        .collect()
}
