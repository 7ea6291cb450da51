//! Row focus navigation handlers

use crate::core::AppState;
use crate::handler::key::KeyAction;

/// Handle navigation actions
pub fn handle(action: KeyAction, state: &mut AppState) {
    let len = state.store.len();
    match action {
        KeyAction::MoveUp => {
            state.focus_index = state.focus_index.saturating_sub(1);
        }
        KeyAction::MoveDown => {
            if state.focus_index + 1 < len {
                state.focus_index += 1;
            }
        }
        KeyAction::MoveToTop => {
            state.focus_index = 0;
        }
        KeyAction::MoveToBottom => {
            state.focus_index = len.saturating_sub(1);
        }
        _ => {}
    }
}
