//! Diagnostic logging and telemetry events.
//!
//! The terminal belongs to the TUI, so diagnostics never go to stdout or
//! stderr while the widget runs. [`init_logging`] routes `tracing` output to
//! an optional log file, and [`TelemetrySink`] implementations receive
//! structured events describing each page load.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::catalog::{CatalogError, FailureKind};

/// Environment variable holding the `tracing` filter directives.
pub const LOG_FILTER_ENV: &str = "POPCORN_LOG";

/// A structured telemetry event emitted by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A page of popular movies was fetched and sampled.
    PageLoaded {
        /// Page number that was requested.
        page: u32,
        /// Number of results the catalog returned.
        results: usize,
        /// Number of movies kept after sampling.
        shown: usize,
        /// Request latency in milliseconds.
        latency_ms: u64,
    },
    /// Fetching a page failed.
    PageFailed {
        /// Page number that was requested.
        page: u32,
        /// Failure classification.
        kind: FailureKind,
    },
    /// The refetch rule stopped requesting new pages.
    CatalogExhausted {
        /// Last page that was requested.
        page: u32,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Forwards telemetry events to `tracing` as JSON at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "popcorn::telemetry", "{serialised}");
    }
}

/// Installs the global `tracing` subscriber.
///
/// With no `log_file` nothing is installed and diagnostics are discarded.
/// Otherwise events are appended to the file, filtered by
/// [`LOG_FILTER_ENV`] (default `info`).
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the log file cannot be opened and
/// [`CatalogError::Configuration`] when a global subscriber is already set.
pub fn init_logging(log_file: Option<&Utf8Path>) -> Result<(), CatalogError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let file = open_log_file(path)?;

    tracing::subscriber::set_global_default(file_subscriber(file, filter)).map_err(|error| {
        CatalogError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        }
    })
}

fn open_log_file(path: &Utf8Path) -> Result<File, CatalogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| CatalogError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}

fn file_subscriber(
    file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
}

/// Test helpers for asserting on recorded telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Drains and returns the events recorded so far.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|mut events| events.drain(..).collect())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
