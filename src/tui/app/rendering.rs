//! Rendering logic for the widget.
//!
//! These are pure query methods that read state without modification. The
//! body shows exactly one of: loading indicator, error, exhausted notice, or
//! the card list, checked in that order.

use super::PopularMoviesApp;
use crate::tui::components::{MovieListComponent, MovieListViewContext, REMOVAL_CONTROL_LABEL};

/// Text shown while a page is loading.
pub(crate) const LOADING_MESSAGE: &str = "Loading movies...";

/// Text shown once the refetch rule has given up.
pub(crate) const EXHAUSTED_MESSAGE: &str = "No more movies to show.";

impl PopularMoviesApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        format!("Popular movies (page {})\n", self.state.page())
    }

    /// Renders the body for the current display state.
    pub(super) fn render_body(&self) -> String {
        if self.state.is_loading() {
            return format!("  {LOADING_MESSAGE}\n");
        }

        if let Some(error) = self.state.error() {
            return format!("  {error}\n");
        }

        if self.state.is_exhausted() && self.state.movies().is_empty() {
            return format!("  {EXHAUSTED_MESSAGE}\n");
        }

        let ctx = MovieListViewContext {
            entries: self.state.movies(),
            cursor: self.state.cursor(),
            control: self.settings.control,
            image_base: &self.settings.image_base,
            max_width: self.width as usize,
        };
        MovieListComponent::view(&ctx)
    }

    /// Renders the status bar with key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let removal = self.settings.control.hint();
        if self.state.error().is_some() {
            return "r:retry  ?:help  q:quit\n".to_owned();
        }
        if self.width <= 40 {
            return format!("{removal}  ?:help  q:quit\n");
        }
        format!("j/k:move  {removal}  ?:help  q:quit\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        let control = self.settings.control;
        let removal_keys = control.key_names();
        format!(
            "\
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Next movie
  k, Up      Previous movie

Movies:
  {removal_keys:<10} {REMOVAL_CONTROL_LABEL} ({control} control)
  r          Retry after a failed load

Other:
  ?          Toggle this help
  q, Esc     Quit

Press any key to close this help.
"
        )
    }
}
