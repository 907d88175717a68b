//! Terminal user interface for the popular-movies widget.
//!
//! The widget follows the Model-View-Update (MVU) pattern on top of
//! bubbletea-rs:
//!
//! - **Model**: [`app::PopularMoviesApp`] owns the [`state::ViewState`]
//! - **View**: [`components`] render cards, stars, and removal controls
//! - **Update**: [`messages::AppMsg`] values drive every state transition
//!
//! Network calls and removal delays run as bubbletea commands whose results
//! come back as messages, so all state changes happen on the update loop.
//!
//! # Session context
//!
//! bubbletea-rs calls `Model::init()` as a static function, so the gateway
//! and settings are handed over through module-level storage. Call
//! [`set_session_context`] before starting the program.

use std::sync::{Arc, OnceLock};

use crate::catalog::CatalogGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod settings;
pub mod state;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use app::PopularMoviesApp;
pub use settings::WidgetSettings;

/// Global storage for the session context, read by `PopularMoviesApp::init()`.
static SESSION_CONTEXT: OnceLock<SessionContext> = OnceLock::new();

/// Everything the widget needs at mount time.
#[derive(Clone)]
pub struct SessionContext {
    /// Catalog used for page fetches.
    pub gateway: Arc<dyn CatalogGateway>,
    /// Receiver for telemetry events.
    pub telemetry: Arc<dyn TelemetrySink>,
    /// Behavioural settings.
    pub settings: WidgetSettings,
}

impl SessionContext {
    /// Creates a context that discards telemetry.
    #[must_use]
    pub fn new(gateway: Arc<dyn CatalogGateway>, settings: WidgetSettings) -> Self {
        Self {
            gateway,
            telemetry: Arc::new(NoopTelemetrySink),
            settings,
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Sets the session context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_session_context(context: SessionContext) -> bool {
    SESSION_CONTEXT.set(context).is_ok()
}

/// Returns a clone of the stored session context, if one was set.
pub(crate) fn session_context() -> Option<SessionContext> {
    SESSION_CONTEXT.get().cloned()
}
