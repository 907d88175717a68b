//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results (page fetches and
//! removal timers), and terminal events.

use crate::catalog::{CatalogError, PopularPage};

/// Messages for the popular-movies widget.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move focus to the previous card.
    CursorUp,
    /// Move focus to the next card.
    CursorDown,

    // Removal
    /// Start removing the focused card.
    RemoveSelected,
    /// Start removing the card with this movie id.
    Remove(u64),
    /// The exit delay for this movie id has elapsed.
    RemovalElapsed(u64),

    // Data loading
    /// A page fetch settled successfully.
    FetchComplete {
        /// Page that was requested.
        page: u32,
        /// Decoded catalog page, before sampling.
        result: PopularPage,
        /// Request latency in milliseconds.
        latency_ms: u64,
    },
    /// A page fetch failed.
    FetchFailed {
        /// Page that was requested.
        page: u32,
        /// Underlying failure, for diagnostics only.
        error: CatalogError,
    },
    /// Retry the page whose fetch failed.
    RetryRequested,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Whether the message moves the focus.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::CursorUp | Self::CursorDown)
    }

    /// Whether the message belongs to the removal flow.
    #[must_use]
    pub const fn is_removal(&self) -> bool {
        matches!(
            self,
            Self::RemoveSelected | Self::Remove(_) | Self::RemovalElapsed(_)
        )
    }

    /// Whether the message belongs to page loading.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::FetchComplete { .. } | Self::FetchFailed { .. } | Self::RetryRequested
        )
    }
}
