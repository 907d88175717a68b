//! Page loading handlers for the popular-movies widget.
//!
//! A fetch runs as a command that resolves to `FetchComplete` or
//! `FetchFailed`. Successful pages are sampled before they reach the view
//! state. Failures are logged with their detail and shown to the user only
//! as [`FETCH_ERROR_MESSAGE`].

use std::any::Any;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::PopularMoviesApp;
use crate::catalog::{CatalogError, PopularPage};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::Refetch;

/// The only failure text users ever see.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load movies.";

impl PopularMoviesApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FetchComplete {
                page,
                result,
                latency_ms,
            } => self.handle_fetch_complete(*page, result, *latency_ms),
            AppMsg::FetchFailed { page, error } => self.handle_fetch_failed(*page, error),
            AppMsg::RetryRequested => self.handle_retry_requested(),
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Samples a fetched page into the view state.
    ///
    /// An empty page immediately triggers the refetch rule.
    fn handle_fetch_complete(
        &mut self,
        page: u32,
        result: &PopularPage,
        latency_ms: u64,
    ) -> Option<Cmd> {
        let returned = result.results.len();
        let shown = self.sampler.draw(result.results.clone());
        self.state.apply_page(shown, result.total_pages);

        tracing::debug!(
            page,
            returned,
            shown = self.state.movies().len(),
            "popular movies page loaded"
        );
        self.telemetry.record(TelemetryEvent::PageLoaded {
            page,
            results: returned,
            shown: self.state.movies().len(),
            latency_ms,
        });

        self.apply_refetch_rule()
    }

    /// Records a failed fetch, keeping the current list.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_fetch_failed(&mut self, page: u32, error: &CatalogError) -> Option<Cmd> {
        tracing::warn!(page, error = %error, "popular movies fetch failed");
        self.state.apply_failure(FETCH_ERROR_MESSAGE);
        self.telemetry.record(TelemetryEvent::PageFailed {
            page,
            kind: error.kind(),
        });
        None
    }

    /// Requests the failed page again.
    fn handle_retry_requested(&mut self) -> Option<Cmd> {
        let page = self.state.retry()?;
        tracing::info!(page, "retrying popular movies fetch");
        Some(self.fetch_cmd(page))
    }

    /// Applies the empty-list refetch rule and starts the fetch it asks for.
    pub(super) fn apply_refetch_rule(&mut self) -> Option<Cmd> {
        match self.state.check_refetch(&self.settings.refetch) {
            Refetch::Idle => None,
            Refetch::Started(page) => {
                tracing::info!(page, "visible list is empty; fetching next page");
                Some(self.fetch_cmd(page))
            }
            Refetch::Exhausted(page) => {
                tracing::info!(page, "no further pages available");
                self.telemetry
                    .record(TelemetryEvent::CatalogExhausted { page });
                None
            }
        }
    }

    /// Creates a command that fetches `page` and reports the outcome.
    pub(super) fn fetch_cmd(&self, page: u32) -> Cmd {
        let gateway = self.gateway.clone();
        Box::pin(async move {
            let Some(catalog) = gateway else {
                let error = CatalogError::Configuration {
                    message: "catalog session context not configured".to_owned(),
                };
                let msg = AppMsg::FetchFailed { page, error };
                return Some(Box::new(msg) as Box<dyn Any + Send>);
            };

            let start = Instant::now();
            let outcome = catalog.popular_movies(page).await;
            let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            let msg = match outcome {
                Ok(result) => AppMsg::FetchComplete {
                    page,
                    result,
                    latency_ms,
                },
                Err(error) => AppMsg::FetchFailed { page, error },
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }
}
