//! Action dispatch: turns resolved shortcuts into state operations.

use anyhow::Result;
use tracing::debug;

use crate::shortcuts::Action;
use crate::tui::links::{self, LinkOutcome};
use crate::tui::{AppState, DetailsTarget, Focus};
use crate::view_model::ViewId;

/// Dispatch an action to its handler.
///
/// Returns `Ok(true)` when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    debug!(action = action.id(), "Dispatching action");

    match action {
        // Navigation
        Action::NavigateUp => state.move_cursor(-1),
        Action::NavigateDown => state.move_cursor(1),
        Action::JumpToFirst => state.cursor_to_first(),
        Action::JumpToLast => state.cursor_to_last(),

        // Views
        Action::ShowView(view) => state.set_active_view(view),
        Action::NextView => state.set_active_view(state.active_view.next()),
        Action::PreviousView => state.set_active_view(state.active_view.previous()),

        // Releases
        Action::Select => handle_select(state),
        Action::ToggleItem => handle_toggle(state),
        Action::CycleNext => handle_cycle(state, true),
        Action::CyclePrevious => handle_cycle(state, false),
        Action::NextTab => state.next_tab(),
        Action::PreviousTab => state.previous_tab(),
        Action::Back => state.focus = Focus::List,

        // Links
        Action::OpenLink => handle_open_link(state),
        Action::NextLink => state.link_cursor = state.link_cursor.wrapping_add(1),
        Action::CopyLink => handle_copy_link(state),

        // New release modal
        Action::NewRelease => state.open_new_release_form(),
        Action::NextField => {
            if let Some(form) = state.new_release_form.as_mut() {
                form.next_field();
            }
        }
        Action::PreviousField => {
            if let Some(form) = state.new_release_form.as_mut() {
                form.previous_field();
            }
        }
        Action::Submit => {
            if state.field_editor.is_some() {
                state.commit_field_editor();
            } else {
                state.submit_new_release();
            }
        }
        Action::Cancel => {
            if state.field_editor.is_some() {
                state.cancel_field_editor();
            } else {
                state.close_new_release_form();
            }
        }

        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }

    Ok(false)
}

fn handle_select(state: &mut AppState) {
    match state.active_view {
        ViewId::Dashboard | ViewId::Releases if state.focus == Focus::List => {
            if let Some(id) = state.release_at_cursor().map(str::to_string) {
                state.select_release(&id);
            }
        }
        ViewId::Releases => match state.details_target() {
            Some(DetailsTarget::Field(field)) if field.is_text() => {
                state.open_field_editor(field);
            }
            Some(DetailsTarget::Field(field)) => state.cycle_selected_field(field, true),
            Some(DetailsTarget::Item { section, key }) => {
                state.toggle_release_item(section, key);
            }
            None => {}
        },
        _ => {}
    }
}

fn handle_toggle(state: &mut AppState) {
    if state.active_view.is_business() {
        if let Some(row) = state.focused_business_row() {
            state.toggle_business_item(row.section, row.key);
        }
        return;
    }

    match state.details_target() {
        Some(DetailsTarget::Item { section, key }) => {
            state.toggle_release_item(section, key);
        }
        Some(DetailsTarget::Field(field)) if !field.is_text() => {
            state.cycle_selected_field(field, true);
        }
        _ => {}
    }
}

fn handle_cycle(state: &mut AppState, forward: bool) {
    if let Some(form) = state.new_release_form.as_mut() {
        if forward {
            form.cycle_next();
        } else {
            form.cycle_previous();
        }
    } else if let Some(DetailsTarget::Field(field)) = state.details_target() {
        state.cycle_selected_field(field, forward);
    }
}

fn handle_open_link(state: &mut AppState) {
    let Some(link) = state.focused_link() else {
        state.set_status("No link on this item");
        return;
    };
    match links::open_or_copy(link.href) {
        Ok(LinkOutcome::Opened) => state.set_status(format!("Opened {}", link.label)),
        Ok(LinkOutcome::Copied) => {
            state.set_status(format!("Could not open a browser, copied {}", link.href));
        }
        Err(e) => state.set_error(format!("Failed to open {}: {e:#}", link.href)),
    }
}

fn handle_copy_link(state: &mut AppState) {
    let Some(link) = state.focused_link() else {
        state.set_status("No link on this item");
        return;
    };
    match links::copy_to_clipboard(link.href) {
        Ok(()) => state.set_status(format!("Copied {}", link.href)),
        Err(e) => state.set_error(format!("{e:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ThemeMode};
    use crate::models::{ReleaseStatus, ReleaseType};
    use crate::services::{MemoryStore, ReleaseStore};
    use crate::tui::{DetailField, Store};
    use crate::view_model::ChecklistTab;

    fn state() -> AppState {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        let store: Store = ReleaseStore::new(Box::new(MemoryStore::new()));
        AppState::new(store, config).unwrap()
    }

    #[test]
    fn test_quit() {
        let mut state = state();
        assert!(dispatch_action(&mut state, Action::Quit).unwrap());
        assert!(state.should_quit);
    }

    #[test]
    fn test_select_card_opens_details() {
        let mut state = state();
        dispatch_action(&mut state, Action::Select).unwrap();
        assert_eq!(state.active_view, ViewId::Releases);
        assert_eq!(state.selected_release_id.as_deref(), Some("sample_amame"));
        assert_eq!(state.focus, Focus::Details);
    }

    #[test]
    fn test_details_select_and_cycle() {
        let mut state = state();
        state.select_release("sample_amame");

        // Cursor on Title: Enter opens the editor
        dispatch_action(&mut state, Action::Select).unwrap();
        assert!(state.field_editor.is_some());
        dispatch_action(&mut state, Action::Cancel).unwrap();
        assert!(state.field_editor.is_none());

        // Type field: Left/Right cycle
        state.details_cursor = 2;
        dispatch_action(&mut state, Action::CycleNext).unwrap();
        assert_eq!(state.selected_release().unwrap().release_type, ReleaseType::Ep);

        // Status field: Enter cycles forward
        state.details_cursor = 3;
        dispatch_action(&mut state, Action::Select).unwrap();
        assert_eq!(
            state.selected_release().unwrap().status,
            ReleaseStatus::ReadyToRelease
        );
    }

    #[test]
    fn test_details_toggle_item() {
        let mut state = state();
        state.select_release("sample_amame");
        dispatch_action(&mut state, Action::NextTab).unwrap();
        assert_eq!(state.active_tab, ChecklistTab::Rights);

        state.details_cursor = DetailField::ALL.len();
        dispatch_action(&mut state, Action::ToggleItem).unwrap();
        assert!(state
            .selected_release()
            .unwrap()
            .checklists
            .is_checked("rights", "splitsConfirmed"));
    }

    #[test]
    fn test_back_returns_focus_to_list() {
        let mut state = state();
        state.select_release("sample_amame");
        dispatch_action(&mut state, Action::Back).unwrap();
        assert_eq!(state.focus, Focus::List);
        assert!(state.details_view().is_some());
    }

    #[test]
    fn test_business_toggle() {
        let mut state = state();
        dispatch_action(&mut state, Action::ShowView(ViewId::Royalties)).unwrap();
        dispatch_action(&mut state, Action::ToggleItem).unwrap();
        assert!(state.business.is_checked("royaltiesAccounts", "proAccount"));
    }

    #[test]
    fn test_next_link_cycles() {
        let mut state = state();
        dispatch_action(&mut state, Action::ShowView(ViewId::Company)).unwrap();
        // Publishing entity's first row has three PRO links
        state.business_cursor = 4;
        assert_eq!(state.focused_link().unwrap().label, "BMI");
        dispatch_action(&mut state, Action::NextLink).unwrap();
        assert_eq!(state.focused_link().unwrap().label, "ASCAP");
        dispatch_action(&mut state, Action::NextLink).unwrap();
        dispatch_action(&mut state, Action::NextLink).unwrap();
        assert_eq!(state.focused_link().unwrap().label, "BMI");
    }

    #[test]
    fn test_view_cycle() {
        let mut state = state();
        dispatch_action(&mut state, Action::PreviousView).unwrap();
        assert_eq!(state.active_view, ViewId::Consulting);
        dispatch_action(&mut state, Action::NextView).unwrap();
        assert_eq!(state.active_view, ViewId::Dashboard);
    }
}
