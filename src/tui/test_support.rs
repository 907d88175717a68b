//! Test helpers for driving the widget without a terminal.
//!
//! [`StubCatalogGateway`] serves canned pages and records which pages were
//! requested. [`resolve`] and [`drive`] stand in for the bubbletea runtime
//! by awaiting commands and feeding the resulting messages back into the
//! model.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bubbletea_rs::Cmd;

use crate::catalog::{CatalogError, CatalogGateway, Movie, PopularPage};

use super::app::PopularMoviesApp;
use super::messages::AppMsg;

/// Gateway returning queued responses in order.
///
/// Once the queue is drained every further request receives an empty page.
#[derive(Debug, Default)]
pub struct StubCatalogGateway {
    responses: Mutex<VecDeque<Result<PopularPage, CatalogError>>>,
    requests: Mutex<Vec<u32>>,
}

impl StubCatalogGateway {
    /// Creates a stub that answers the first request with `movies`.
    #[must_use]
    pub fn with_page(movies: Vec<Movie>) -> Self {
        Self::default().then_page(movies)
    }

    /// Creates a stub that fails the first request with `error`.
    #[must_use]
    pub fn with_failure(error: CatalogError) -> Self {
        Self::default().then_failure(error)
    }

    /// Queues a successful page.
    #[must_use]
    pub fn then_page(self, movies: Vec<Movie>) -> Self {
        self.push(Ok(PopularPage::from_results(movies)));
        self
    }

    /// Queues a failed request.
    #[must_use]
    pub fn then_failure(self, error: CatalogError) -> Self {
        self.push(Err(error));
        self
    }

    /// Pages requested so far, in request order.
    #[must_use]
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn push(&self, response: Result<PopularPage, CatalogError>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }
}

#[async_trait]
impl CatalogGateway for StubCatalogGateway {
    async fn popular_movies(&self, page: u32) -> Result<PopularPage, CatalogError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(page);
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or_else(|| Ok(PopularPage::from_results(Vec::new())))
    }
}

/// Awaits a command and returns its message if it is an [`AppMsg`].
pub async fn resolve(cmd: Cmd) -> Option<AppMsg> {
    let msg = cmd.await?;
    msg.downcast::<AppMsg>().ok().map(|boxed| *boxed)
}

/// Runs `cmd` and every command it leads to, one at a time, feeding each
/// resulting message into `app`.
///
/// Stops when no commands remain or after `max_steps` messages, returning
/// the number of messages handled. Commands that resolve to non-widget
/// messages, such as quit, end their branch.
pub async fn drive(app: &mut PopularMoviesApp, cmd: Cmd, max_steps: usize) -> usize {
    let mut pending: VecDeque<Cmd> = VecDeque::from([cmd]);
    let mut handled = 0;

    while handled < max_steps {
        let Some(next) = pending.pop_front() else {
            break;
        };
        let Some(msg) = resolve(next).await else {
            continue;
        };
        handled += 1;
        if let Some(follow_up) = app.handle_message(&msg) {
            pending.push_back(follow_up);
        }
    }

    handled
}
