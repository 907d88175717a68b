//! Two-phase removal: flag the card, then drop it after the exit delay.
//!
//! The delay runs as a command racing the widget's shutdown signal, so a
//! timer that outlives the widget resolves to nothing instead of touching
//! state. A timer that fires for a card that is already gone is ignored.

use std::any::Any;

use bubbletea_rs::Cmd;
use tokio::sync::watch;

use super::PopularMoviesApp;
use crate::tui::messages::AppMsg;

impl PopularMoviesApp {
    /// Dispatches removal messages to their handlers.
    pub(super) fn handle_removal_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RemoveSelected => self.handle_remove_selected(),
            AppMsg::Remove(id) => self.handle_remove(*id),
            AppMsg::RemovalElapsed(id) => self.handle_removal_elapsed(*id),
            _ => {
                // Unreachable: caller filters to removal messages.
                None
            }
        }
    }

    fn handle_remove_selected(&mut self) -> Option<Cmd> {
        let id = self.state.selected()?.movie.id;
        self.handle_remove(id)
    }

    /// Moves a card from `visible` to `removing` and arms its timer.
    fn handle_remove(&mut self, id: u64) -> Option<Cmd> {
        if !self.state.mark_removing(id) {
            return None;
        }
        tracing::debug!(id, "movie flagged for removal");
        Some(self.removal_timer(id))
    }

    /// Moves a card from `removing` to removed, then applies the refetch
    /// rule in case the list is now empty.
    fn handle_removal_elapsed(&mut self, id: u64) -> Option<Cmd> {
        if !self.state.remove_flagged(id) {
            tracing::debug!(id, "ignoring stale removal timer");
            return None;
        }
        tracing::debug!(id, "movie removed");
        self.apply_refetch_rule()
    }

    /// Creates a command that reports `RemovalElapsed` after the exit delay,
    /// or nothing if the widget is torn down first.
    fn removal_timer(&self, id: u64) -> Cmd {
        let delay = self.settings.removal_delay;
        let shutdown = self.shutdown.subscribe();
        Box::pin(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => {
                    Some(Box::new(AppMsg::RemovalElapsed(id)) as Box<dyn Any + Send>)
                }
                () = wait_for_shutdown(shutdown) => None,
            }
        })
    }
}

/// Resolves once teardown is signalled or the widget is dropped.
async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    loop {
        let stopped = *shutdown.borrow_and_update();
        if stopped {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}
