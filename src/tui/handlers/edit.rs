//! Input handler for the inline field editor of the details panel.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::shortcuts::CONTEXT_EDIT;
use crate::tui::AppState;

/// Handle input while a release field is being edited
pub fn handle_edit_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.resolve(CONTEXT_EDIT, key) {
        return super::dispatch_action(state, action);
    }

    let Some(editor) = state.field_editor.as_mut() else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => editor.insert(c),
        KeyCode::Backspace => editor.backspace(),
        _ => return Ok(false),
    }

    if editor.is_live() {
        state.sync_field_editor();
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ThemeMode};
    use crate::services::{MemoryStore, ReleaseStore};
    use crate::tui::{DetailField, Store};

    fn state() -> AppState {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        let store: Store = ReleaseStore::new(Box::new(MemoryStore::new()));
        let mut state = AppState::new(store, config).unwrap();
        state.select_release("sample_amame");
        state
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_edit_input(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_artist_applies_per_keystroke() {
        let mut state = state();
        state.open_field_editor(DetailField::Artist);
        press(&mut state, KeyCode::Char('!'));
        assert_eq!(state.selected_release().unwrap().artist, "Jae-P ft. Jexy!");
        press(&mut state, KeyCode::Enter);
        assert!(state.field_editor.is_none());
        assert_eq!(state.selected_release().unwrap().artist, "Jae-P ft. Jexy!");
    }

    #[test]
    fn test_escape_restores_title() {
        let mut state = state();
        state.open_field_editor(DetailField::Title);
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.selected_release().unwrap().title, "ÁMAM");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.selected_release().unwrap().title, "ÁMAME");
    }

    #[test]
    fn test_date_applies_on_commit() {
        let mut state = state();
        state.open_field_editor(DetailField::Date);
        for c in "2026-02-14".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        assert_eq!(state.selected_release().unwrap().date, None);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.selected_release().unwrap().date_label(), "2026-02-14");
    }

    #[test]
    fn test_q_is_text() {
        let mut state = state();
        state.open_field_editor(DetailField::Title);
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        assert_eq!(state.field_editor.as_ref().unwrap().buffer, "ÁMAMEq");
    }
}
