//! Action execution handler
//!
//! This module handles the execution of KeyActions and MouseActions,
//! translating them into store operations and presentation state changes.

mod input;
mod list_ops;
mod navigation;

pub use input::{apply_paste, apply_text_key};

use crate::app::exit_code;
use crate::core::{AppState, Focus, Mode, Variant};
use crate::handler::key::KeyAction;
use crate::handler::mouse::MouseAction;
use crate::render::{Button, Hit, RowButton, ScreenLayout};

/// Result of action execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue the event loop
    Continue,
    /// Quit with the given exit code
    Quit(i32),
}

/// Handle a KeyAction and update state accordingly
pub fn handle_action(action: KeyAction, state: &mut AppState) -> ActionResult {
    match action {
        KeyAction::None => {}

        KeyAction::Quit => {
            state.should_quit = true;
            return ActionResult::Quit(exit_code::SUCCESS);
        }

        // Focus
        KeyAction::FocusInput => state.focus = Focus::Input,
        KeyAction::FocusList => state.focus = Focus::List,
        KeyAction::FocusRowEdit => {
            if state.store.row_editor_visible() {
                state.focus = Focus::RowEdit;
            }
        }

        // Navigation
        KeyAction::MoveUp
        | KeyAction::MoveDown
        | KeyAction::MoveToTop
        | KeyAction::MoveToBottom => navigation::handle(action, state),

        // List operations and modes
        KeyAction::Append
        | KeyAction::SelectRow
        | KeyAction::SwitchMode(_)
        | KeyAction::BeginEdit
        | KeyAction::RemoveFocused
        | KeyAction::SaveEdit => list_ops::handle(action, state),

        KeyAction::ToggleHelp => state.show_help = !state.show_help,
    }

    state.clamp_focus();
    state.sync_focus();
    ActionResult::Continue
}

/// Handle a MouseAction against the layout of the last drawn frame
pub fn handle_mouse_action(
    action: MouseAction,
    state: &mut AppState,
    layout: &ScreenLayout,
) -> ActionResult {
    match action {
        MouseAction::None => ActionResult::Continue,
        MouseAction::ScrollUp(amount) => {
            state.focus_index = state.focus_index.saturating_sub(amount);
            state.clamp_focus();
            ActionResult::Continue
        }
        MouseAction::ScrollDown(amount) => {
            state.focus_index = state.focus_index.saturating_add(amount);
            state.clamp_focus();
            ActionResult::Continue
        }
        MouseAction::Click { col, row } => {
            state.show_help = false;
            let hit = layout.hit(col, row, state);
            handle_click(hit, state)
        }
    }
}

/// Dispatch a click on a screen element
fn handle_click(hit: Hit, state: &mut AppState) -> ActionResult {
    match hit {
        Hit::None => ActionResult::Continue,
        Hit::Input => handle_action(KeyAction::FocusInput, state),
        Hit::Button(Button::Add) => handle_action(KeyAction::Append, state),
        Hit::Button(Button::Delete) => {
            state.focus = Focus::List;
            handle_action(KeyAction::SwitchMode(Mode::Delete), state)
        }
        Hit::Button(Button::Edit) => {
            state.focus = Focus::List;
            handle_action(KeyAction::SwitchMode(Mode::Edit), state)
        }
        Hit::Row(index) => {
            state.focus_index = index;
            let editing_here =
                state.store.row_editor_visible() && state.store.edit_cursor() == Some(index);
            if editing_here {
                return handle_action(KeyAction::FocusRowEdit, state);
            }
            state.focus = Focus::List;
            let action = match state.variant() {
                Variant::Modal => KeyAction::SelectRow,
                Variant::Classic => KeyAction::BeginEdit,
            };
            handle_action(action, state)
        }
        Hit::RowButton { index, button } => {
            state.focus_index = index;
            let action = match button {
                RowButton::Save => KeyAction::SaveEdit,
                RowButton::Edit => KeyAction::BeginEdit,
                RowButton::Remove => KeyAction::RemoveFocused,
            };
            handle_action(action, state)
        }
    }
}
