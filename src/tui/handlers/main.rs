//! Main UI input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::AppState;

/// Handle input outside the modal and the field editor
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let context = state.input_context();

    if let Some(action) = state.shortcuts.resolve(context, key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}
