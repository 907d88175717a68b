//! In-memory snapshot of what the widget displays.
//!
//! The view state owns the sampled movies, the loading and error flags, and
//! the page counter. Every mutation goes through a method here so the
//! invariants hold regardless of which message triggered it:
//!
//! - `loading` is set when a fetch starts and cleared when it settles.
//! - A successful page replaces the list and clears any error.
//! - A failed page leaves the list untouched.
//! - Removal is two-phase: flag first, filter later.

use crate::catalog::Movie;

use super::refetch_policy::{RefetchDecision, RefetchPolicy};

/// One visible movie and its removal marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieEntry {
    /// The catalog record, copied unmodified.
    pub movie: Movie,
    /// Set once removal has been requested; cleared only by removal itself.
    pub removing: bool,
}

impl MovieEntry {
    /// Wraps a movie in the visible state.
    #[must_use]
    pub const fn new(movie: Movie) -> Self {
        Self {
            movie,
            removing: false,
        }
    }
}

/// Outcome of checking the empty-list refetch rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refetch {
    /// Nothing to do; the list has content, a fetch is running, or an error
    /// is being shown.
    Idle,
    /// The page counter advanced and a fetch for this page must start.
    Started(u32),
    /// The policy refused to advance; the widget is now exhausted.
    Exhausted(u32),
}

/// The widget's view state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    movies: Vec<MovieEntry>,
    loading: bool,
    error: Option<String>,
    page: u32,
    total_pages: Option<u32>,
    exhausted: bool,
    cursor: usize,
}

impl ViewState {
    /// Creates the mount-time state: empty, loading, no error.
    ///
    /// Page numbers are 1-based; a `start_page` of 0 is bumped to 1.
    #[must_use]
    pub fn new(start_page: u32) -> Self {
        Self {
            movies: Vec::new(),
            loading: true,
            error: None,
            page: start_page.max(1),
            total_pages: None,
            exhausted: false,
            cursor: 0,
        }
    }

    /// Visible movies in sampled order.
    #[must_use]
    pub fn movies(&self) -> &[MovieEntry] {
        &self.movies
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error message from the most recent failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current page counter.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Whether the refetch rule has given up.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Index of the focused card.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The focused card, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&MovieEntry> {
        self.movies.get(self.cursor)
    }

    /// Finds a visible movie by identifier.
    #[must_use]
    pub fn entry(&self, id: u64) -> Option<&MovieEntry> {
        self.movies.iter().find(|entry| entry.movie.id == id)
    }

    /// Marks a fetch for the current page as started.
    pub const fn begin_fetch(&mut self) -> u32 {
        self.loading = true;
        self.page
    }

    /// Replaces the list with a freshly sampled page.
    pub fn apply_page(&mut self, movies: Vec<Movie>, total_pages: Option<u32>) {
        self.movies = movies.into_iter().map(MovieEntry::new).collect();
        self.loading = false;
        self.error = None;
        if total_pages.is_some() {
            self.total_pages = total_pages;
        }
        self.clamp_cursor();
    }

    /// Records a failed fetch without touching the list.
    pub fn apply_failure(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_owned());
    }

    /// Clears a failure so the current page can be requested again.
    ///
    /// Returns the page to fetch, or `None` when there is no failure to
    /// retry or a fetch is already running.
    pub fn retry(&mut self) -> Option<u32> {
        if self.loading || self.error.is_none() {
            return None;
        }
        self.error = None;
        Some(self.begin_fetch())
    }

    /// Flags a movie for removal.
    ///
    /// Returns `true` only on the `visible -> removing` transition; an
    /// unknown id or a movie already being removed yields `false`.
    pub fn mark_removing(&mut self, id: u64) -> bool {
        match self
            .movies
            .iter_mut()
            .find(|entry| entry.movie.id == id && !entry.removing)
        {
            Some(entry) => {
                entry.removing = true;
                true
            }
            None => false,
        }
    }

    /// Drops a movie previously flagged for removal.
    ///
    /// Returns `false` when the movie is gone or was never flagged, so stale
    /// timers cannot remove anything else.
    pub fn remove_flagged(&mut self, id: u64) -> bool {
        let Some(index) = self
            .movies
            .iter()
            .position(|entry| entry.movie.id == id && entry.removing)
        else {
            return false;
        };
        self.movies.remove(index);
        self.clamp_cursor();
        true
    }

    /// Applies the empty-list refetch rule.
    ///
    /// When the list is empty, nothing is loading, no error is displayed,
    /// and the widget is not exhausted, the page counter advances and a
    /// fetch begins in the same step. Because `loading` is set before this
    /// returns, a second call in the same tick is a no-op.
    pub fn check_refetch(&mut self, policy: &RefetchPolicy) -> Refetch {
        if !self.movies.is_empty() || self.loading || self.error.is_some() || self.exhausted {
            return Refetch::Idle;
        }

        match policy.next_after(self.page, self.total_pages) {
            RefetchDecision::Fetch(next) => {
                self.page = next;
                Refetch::Started(self.begin_fetch())
            }
            RefetchDecision::Exhausted => {
                self.exhausted = true;
                Refetch::Exhausted(self.page)
            }
        }
    }

    /// Moves the focus up one card.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the focus down one card, stopping at the last.
    pub fn cursor_down(&mut self) {
        let max_index = self.movies.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(max_index);
    }

    fn clamp_cursor(&mut self) {
        let max_index = self.movies.len().saturating_sub(1);
        self.cursor = self.cursor.min(max_index);
    }
}
