//! Text input handlers
//!
//! Routes text-editing keys and pasted text to whichever input has focus.
//! Each change replaces the whole pending value in the store.

use crossterm::event::KeyEvent;

use crate::core::{AppState, Focus};
use crate::handler::key::{insert_text, update_input_buffer};

/// Apply a text-editing key to the focused input.
///
/// Returns true if the key was consumed.
pub fn apply_text_key(key: KeyEvent, state: &mut AppState) -> bool {
    match state.focus {
        Focus::Input => {
            let Some((buffer, caret)) =
                update_input_buffer(key, state.store.pending_input(), state.input_caret)
            else {
                return false;
            };
            state.input_caret = caret;
            if buffer != state.store.pending_input() {
                state.store.set_pending_input(buffer);
            }
            true
        }
        Focus::RowEdit if state.store.row_editor_visible() => {
            let Some((buffer, caret)) =
                update_input_buffer(key, state.store.edit_text(), state.edit_caret)
            else {
                return false;
            };
            state.edit_caret = caret;
            if buffer != state.store.edit_text() {
                state.store.set_edit_text(buffer);
            }
            true
        }
        _ => false,
    }
}

/// Insert pasted text into the focused input.
///
/// Returns true if the text landed somewhere.
pub fn apply_paste(text: &str, state: &mut AppState) -> bool {
    match state.focus {
        Focus::Input => {
            let (buffer, caret) = insert_text(state.store.pending_input(), state.input_caret, text);
            state.input_caret = caret;
            state.store.set_pending_input(buffer);
            true
        }
        Focus::RowEdit if state.store.row_editor_visible() => {
            let (buffer, caret) = insert_text(state.store.edit_text(), state.edit_caret, text);
            state.edit_caret = caret;
            state.store.set_edit_text(buffer);
            true
        }
        _ => false,
    }
}
