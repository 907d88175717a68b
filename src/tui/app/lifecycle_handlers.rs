//! Lifecycle and window handlers for the widget.
//!
//! Quitting signals teardown before the program exits so removal timers
//! still pending resolve without a message.

use bubbletea_rs::Cmd;

use super::PopularMoviesApp;
use crate::tui::messages::AppMsg;

impl PopularMoviesApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => {
                self.teardown();
                Some(bubbletea_rs::quit())
            }
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }
}
