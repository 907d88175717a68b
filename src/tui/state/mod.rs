//! State management for the popular-movies widget.
//!
//! [`ViewState`] holds what is on screen; [`RefetchPolicy`] bounds how far
//! the empty-list rule may advance through the catalog.

mod refetch_policy;
mod view_state;

pub use refetch_policy::{DEFAULT_MAX_PAGE, RefetchDecision, RefetchPolicy};
pub use view_state::{MovieEntry, Refetch, ViewState};
