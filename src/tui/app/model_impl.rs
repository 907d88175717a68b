//! `Model` trait implementation for the widget.
//!
//! Handles initialisation from the session context, update dispatch, and
//! view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::PopularMoviesApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for PopularMoviesApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = crate::tui::session_context().map_or_else(Self::unconfigured, |context| {
            Self::new(context.gateway, context.settings).with_telemetry(context.telemetry)
        });

        let cmd = model.mount();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg, self.settings.control) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push('\n');
        output.push_str(&self.render_body());
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }
}
