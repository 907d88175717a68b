//! Focus movement between cards.

use bubbletea_rs::Cmd;

use super::PopularMoviesApp;
use crate::tui::messages::AppMsg;

impl PopularMoviesApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.state.cursor_up(),
            AppMsg::CursorDown => self.state.cursor_down(),
            _ => {
                // Unreachable: caller filters to navigation messages.
            }
        }
        None
    }
}
