//! Bounds on the empty-list refetch rule.
//!
//! When the visible list runs dry the widget asks the catalog for the next
//! page. Without a bound, a catalog that keeps answering with empty pages
//! would be polled forever, so the policy caps the page number and honours
//! the `total_pages` the catalog reports.

/// TMDB refuses `page` values above 500.
pub const DEFAULT_MAX_PAGE: u32 = 500;

/// Decision taken when the visible list becomes empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefetchDecision {
    /// Fetch the given page next.
    Fetch(u32),
    /// Stop; no further pages are available.
    Exhausted,
}

/// Limits applied to page advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefetchPolicy {
    /// Highest page number that may be requested.
    pub max_page: u32,
}

impl Default for RefetchPolicy {
    fn default() -> Self {
        Self {
            max_page: DEFAULT_MAX_PAGE,
        }
    }
}

impl RefetchPolicy {
    /// Creates a policy capped at `max_page`.
    #[must_use]
    pub const fn new(max_page: u32) -> Self {
        Self { max_page }
    }

    /// Decides what follows `current_page`.
    ///
    /// `total_pages` is the most recent page count reported by the catalog,
    /// if any. The stricter of it and [`Self::max_page`] wins.
    #[must_use]
    pub fn next_after(&self, current_page: u32, total_pages: Option<u32>) -> RefetchDecision {
        let limit = total_pages.map_or(self.max_page, |total| total.min(self.max_page));

        match current_page.checked_add(1) {
            Some(next) if next <= limit => RefetchDecision::Fetch(next),
            _ => RefetchDecision::Exhausted,
        }
    }
}
