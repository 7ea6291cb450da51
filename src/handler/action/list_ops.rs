//! List mutation handlers
//!
//! Bridges key and mouse gestures to the store operations and keeps the
//! presentation state (focus, carets, status message) in step with them.

use crate::core::{AppState, Focus, Mode, RowOutcome};
use crate::handler::key::KeyAction;

/// Handle list-mutating and mode actions
pub fn handle(action: KeyAction, state: &mut AppState) {
    match action {
        KeyAction::Append => {
            state.store.append();
            state.input_caret = 0;
            state.set_message(format!("Added item {}", state.store.len()));
        }
        KeyAction::SelectRow => select_row(state),
        KeyAction::SwitchMode(mode) => {
            if state.mode().is_none() {
                return;
            }
            state.store.switch_mode(mode);
            match mode {
                Mode::Delete => state.set_message("Delete mode: select an item to remove it"),
                Mode::Edit => state.set_message("Edit mode: select an item to edit it"),
                Mode::Normal => state.clear_message(),
            }
        }
        KeyAction::BeginEdit => {
            let index = state.focus_index;
            begin_edit(state, index);
        }
        KeyAction::RemoveFocused => {
            let index = state.focus_index;
            remove(state, index);
        }
        KeyAction::SaveEdit => {
            if let Some(index) = state.store.save_edit() {
                state.focus = Focus::List;
                state.focus_index = index;
                state.edit_caret = 0;
                state.set_message(format!("Saved item {}", index + 1));
            }
        }
        _ => {}
    }
}

/// Apply the mode-gated gesture to the focused row
fn select_row(state: &mut AppState) {
    match state.store.select_row(state.focus_index) {
        RowOutcome::Removed(index) => {
            state.set_message(format!("Deleted item {}", index + 1));
        }
        RowOutcome::Editing(_) => enter_row_editor(state),
        RowOutcome::Ignored => {
            if state.mode() == Some(Mode::Normal) && !state.store.is_empty() {
                state.set_message("Press d to delete or e to edit");
            }
        }
    }
}

/// Open a row for editing regardless of mode
pub fn begin_edit(state: &mut AppState, index: usize) {
    if state.store.begin_edit(index) {
        state.focus_index = index;
        enter_row_editor(state);
    }
}

/// Remove a row regardless of mode
pub fn remove(state: &mut AppState, index: usize) {
    if index < state.store.len() {
        state.store.remove_at(index);
        state.set_message(format!("Deleted item {}", index + 1));
    }
}

fn enter_row_editor(state: &mut AppState) {
    state.focus = Focus::RowEdit;
    state.edit_caret = state.store.edit_text().chars().count();
    state.clear_message();
}
