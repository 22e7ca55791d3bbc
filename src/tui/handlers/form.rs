//! Input handler for the new-release modal.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::shortcuts::CONTEXT_FORM;
use crate::tui::AppState;

/// Handle input while the new-release modal is open
pub fn handle_form_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.resolve(CONTEXT_FORM, key) {
        return super::dispatch_action(state, action);
    }

    let Some(text) = state
        .new_release_form
        .as_mut()
        .and_then(|form| form.active_text_mut())
    else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => text.push(c),
        KeyCode::Backspace => {
            text.pop();
        }
        _ => {}
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ThemeMode};
    use crate::services::{MemoryStore, ReleaseStore};
    use crate::tui::{FormField, Store};
    use crate::view_model::ViewId;

    fn state() -> AppState {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        let store: Store = ReleaseStore::new(Box::new(MemoryStore::new()));
        AppState::new(store, config).unwrap()
    }

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        handle_form_input(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_does_not_trigger_shortcuts() {
        let mut state = state();
        state.open_new_release_form();
        assert!(!press(&mut state, KeyCode::Char('q')));
        type_text(&mut state, "n1");
        assert_eq!(state.new_release_form.as_ref().unwrap().title, "qn1");
        assert!(!state.should_quit);
    }

    #[test]
    fn test_full_form_flow() {
        let mut state = state();
        state.open_new_release_form();
        type_text(&mut state, "Night Drive");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "Jae-P");
        press(&mut state, KeyCode::Tab);
        assert_eq!(
            state.new_release_form.as_ref().unwrap().active_field,
            FormField::Type
        );
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "2025-06-01");
        press(&mut state, KeyCode::Backspace);
        type_text(&mut state, "2");
        press(&mut state, KeyCode::Enter);

        assert!(state.new_release_form.is_none());
        assert_eq!(state.active_view, ViewId::Releases);
        let created = state.selected_release().unwrap();
        assert_eq!(created.title, "Night Drive");
        assert_eq!(created.artist, "Jae-P");
        assert_eq!(created.release_type.label(), "Album");
        assert_eq!(created.date_label(), "2025-06-02");
    }

    #[test]
    fn test_escape_discards() {
        let mut state = state();
        state.open_new_release_form();
        type_text(&mut state, "draft");
        press(&mut state, KeyCode::Esc);
        assert!(state.new_release_form.is_none());
        assert_eq!(state.releases.len(), 1);
    }
}
