//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the widget's state owner and update logic. It
//! coordinates page fetches, sampling, and the two-phase removal flow.
//!
//! # Module Structure
//!
//! - `fetch_handlers`: page loading and the empty-list refetch rule
//! - `removal_handlers`: flag-then-remove flow with cancellable timers
//! - `navigation`: focus movement between cards
//! - `lifecycle_handlers`: quit, help, and resize
//! - `rendering`: view rendering for each display state
//! - `model_impl`: the `bubbletea_rs::Model` implementation

use std::sync::Arc;

use bubbletea_rs::Cmd;
use tokio::sync::watch;

use crate::catalog::CatalogGateway;
use crate::sampler::MovieSampler;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::messages::AppMsg;
use super::settings::WidgetSettings;
use super::state::ViewState;

mod fetch_handlers;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod removal_handlers;
mod rendering;

pub use fetch_handlers::FETCH_ERROR_MESSAGE;

const DEFAULT_WIDTH: u16 = 80;
const DEFAULT_HEIGHT: u16 = 24;

/// Main application model for the popular-movies widget.
pub struct PopularMoviesApp {
    /// What the widget displays.
    pub(crate) state: ViewState,
    /// Random source and size for page sampling.
    sampler: MovieSampler,
    /// Catalog for page fetches; `None` when no session was configured.
    gateway: Option<Arc<dyn CatalogGateway>>,
    /// Receiver for telemetry events.
    telemetry: Arc<dyn TelemetrySink>,
    /// Behavioural settings.
    settings: WidgetSettings,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Flips to `true` on teardown; pending removal timers watch it.
    shutdown: watch::Sender<bool>,
}

impl PopularMoviesApp {
    /// Creates a widget in its mount state: empty list, loading, no error.
    ///
    /// No request is issued until [`Self::mount`] runs the returned command.
    #[must_use]
    pub fn new(gateway: Arc<dyn CatalogGateway>, settings: WidgetSettings) -> Self {
        Self::build(Some(gateway), settings)
    }

    /// Creates a widget with no catalog; every fetch fails with a
    /// configuration error.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::build(None, WidgetSettings::default())
    }

    fn build(gateway: Option<Arc<dyn CatalogGateway>>, settings: WidgetSettings) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            state: ViewState::new(settings.start_page),
            sampler: MovieSampler::new(settings.seed, settings.sample_size),
            gateway,
            telemetry: Arc::new(NoopTelemetrySink),
            settings,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_help: false,
            shutdown,
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the behavioural settings.
    #[must_use]
    pub const fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    /// Whether teardown has been signalled.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Starts the mount-time fetch for the configured start page.
    pub fn mount(&mut self) -> Cmd {
        let page = self.state.begin_fetch();
        tracing::info!(page, "mounting popular movies widget");
        self.fetch_cmd(page)
    }

    /// Signals teardown, cancelling every pending removal timer.
    pub fn teardown(&mut self) {
        self.shutdown.send_replace(true);
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_removal() {
            return self.handle_removal_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}

impl std::fmt::Debug for PopularMoviesApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopularMoviesApp")
            .field("state", &self.state)
            .field("settings", &self.settings)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("show_help", &self.show_help)
            .field("has_gateway", &self.gateway.is_some())
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
#[path = "removal_tests.rs"]
mod removal_tests;
