//! Input handling for the TUI application.
//!
//! Translates terminal key events into application messages. The removal
//! key depends on which control variant the widget was configured with.

use super::components::RemovalControl;
use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
/// Removal keys are checked first so the checkbox variant can claim `x`.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    control: RemovalControl,
) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    if control.is_triggered_by(key.key) {
        return Some(AppMsg::RemoveSelected);
    }

    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('r') => Some(AppMsg::RetryRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
