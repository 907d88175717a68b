//! UI components for the popular-movies widget.
//!
//! Components are stateless renderers: they receive a view context borrowed
//! from the application model and return the text to draw.

mod movie_list;
mod removal_control;
mod star_rating;
mod text_fit;

pub use movie_list::{EMPTY_LIST_MESSAGE, MovieListComponent, MovieListViewContext};
pub use removal_control::{REMOVAL_CONTROL_LABEL, RemovalControl};
pub use star_rating::{STAR_COUNT, StarRating, render_stars};
