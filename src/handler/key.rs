//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{AppState, Focus, Mode, Variant};

/// Actions that can result from key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Move keyboard focus to the new-item input
    FocusInput,
    /// Move keyboard focus to the list
    FocusList,
    /// Move keyboard focus to the row editor
    FocusRowEdit,
    /// Move row focus up
    MoveUp,
    /// Move row focus down
    MoveDown,
    /// Move to first row
    MoveToTop,
    /// Move to last row
    MoveToBottom,
    /// Append the pending input to the list
    Append,
    /// Apply the mode-gated gesture to the focused row
    SelectRow,
    /// Switch interaction mode
    SwitchMode(Mode),
    /// Open the focused row for editing (classic)
    BeginEdit,
    /// Remove the focused row (classic)
    RemoveFocused,
    /// Save the row under edit
    SaveEdit,
    /// Toggle help popup
    ToggleHelp,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    // Any key closes the help popup
    if state.show_help {
        return KeyAction::ToggleHelp;
    }

    match state.focus {
        Focus::Input => handle_input_focus(key),
        Focus::RowEdit => handle_row_edit_focus(key),
        Focus::List => match state.variant() {
            Variant::Modal => handle_modal_list(state, key),
            Variant::Classic => handle_classic_list(state, key),
        },
    }
}

/// Handle non-text keys while the new-item input has focus
fn handle_input_focus(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::Append,
        KeyCode::Tab | KeyCode::Esc | KeyCode::Down => KeyAction::FocusList,
        _ => KeyAction::None, // Buffer updates handled separately
    }
}

/// Handle non-text keys while the row editor has focus
fn handle_row_edit_focus(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::SaveEdit,
        KeyCode::Tab | KeyCode::Esc => KeyAction::FocusList,
        _ => KeyAction::None,
    }
}

/// Keys shared by both list layouts
fn handle_list_common(state: &AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        KeyCode::Char('g') | KeyCode::Home => KeyAction::MoveToTop,
        KeyCode::Char('G') | KeyCode::End => KeyAction::MoveToBottom,
        KeyCode::Char('i') | KeyCode::Char('a') => KeyAction::FocusInput,
        KeyCode::Tab => {
            if state.store.row_editor_visible() {
                KeyAction::FocusRowEdit
            } else {
                KeyAction::FocusInput
            }
        }
        KeyCode::Char('?') => KeyAction::ToggleHelp,
        _ => KeyAction::None,
    }
}

/// Handle keys in the list when modes gate row gestures
fn handle_modal_list(state: &AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::SelectRow,
        KeyCode::Char('d') => KeyAction::SwitchMode(Mode::Delete),
        KeyCode::Char('e') => KeyAction::SwitchMode(Mode::Edit),
        _ => handle_list_common(state, key),
    }
}

/// Handle keys in the list when every row has its own gestures
fn handle_classic_list(state: &AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('e') => KeyAction::BeginEdit,
        KeyCode::Char('d') | KeyCode::Delete => KeyAction::RemoveFocused,
        _ => handle_list_common(state, key),
    }
}

/// Convert a char index into a byte offset within `s`
fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Update input buffer based on key event
///
/// `cursor` counts chars, not bytes.
/// Returns the new buffer content and cursor, or None if the key is not
/// a text-editing key or changes nothing.
pub fn update_input_buffer(key: KeyEvent, buffer: &str, cursor: usize) -> Option<(String, usize)> {
    let len = buffer.chars().count();
    let cursor = cursor.min(len);
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut new_buffer = buffer.to_string();
            new_buffer.insert(byte_offset(buffer, cursor), c);
            Some((new_buffer, cursor + 1))
        }
        KeyCode::Backspace => {
            if cursor > 0 {
                let mut new_buffer = buffer.to_string();
                new_buffer.remove(byte_offset(buffer, cursor - 1));
                Some((new_buffer, cursor - 1))
            } else {
                None
            }
        }
        KeyCode::Delete => {
            if cursor < len {
                let mut new_buffer = buffer.to_string();
                new_buffer.remove(byte_offset(buffer, cursor));
                Some((new_buffer, cursor))
            } else {
                None
            }
        }
        KeyCode::Left => {
            if cursor > 0 {
                Some((buffer.to_string(), cursor - 1))
            } else {
                None
            }
        }
        KeyCode::Right => {
            if cursor < len {
                Some((buffer.to_string(), cursor + 1))
            } else {
                None
            }
        }
        KeyCode::Home => {
            if cursor > 0 {
                Some((buffer.to_string(), 0))
            } else {
                None
            }
        }
        KeyCode::End => {
            if cursor < len {
                Some((buffer.to_string(), len))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Insert pasted text at `cursor`, dropping line breaks
pub fn insert_text(buffer: &str, cursor: usize, text: &str) -> (String, usize) {
    let cursor = cursor.min(buffer.chars().count());
    let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let mut new_buffer = buffer.to_string();
    new_buffer.insert_str(byte_offset(buffer, cursor), &cleaned);
    (new_buffer, cursor + cleaned.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn list_state(variant: Variant) -> AppState {
        let mut state = AppState::new(variant);
        state.focus = Focus::List;
        state
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let mut state = AppState::new(Variant::Modal);
        for focus in [Focus::Input, Focus::List, Focus::RowEdit] {
            state.focus = focus;
            assert_eq!(handle_key_event(&state, ctrl_c), KeyAction::Quit);
        }
    }

    #[test]
    fn test_input_focus_keys() {
        let state = AppState::new(Variant::Modal);
        assert_eq!(handle_key_event(&state, key(KeyCode::Enter)), KeyAction::Append);
        assert_eq!(handle_key_event(&state, key(KeyCode::Tab)), KeyAction::FocusList);
        assert_eq!(handle_key_event(&state, key(KeyCode::Esc)), KeyAction::FocusList);
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('q'))), KeyAction::None);
    }

    #[test]
    fn test_modal_list_keys() {
        let state = list_state(Variant::Modal);
        assert_eq!(
            handle_key_event(&state, key(KeyCode::Char('d'))),
            KeyAction::SwitchMode(Mode::Delete)
        );
        assert_eq!(
            handle_key_event(&state, key(KeyCode::Char('e'))),
            KeyAction::SwitchMode(Mode::Edit)
        );
        assert_eq!(handle_key_event(&state, key(KeyCode::Enter)), KeyAction::SelectRow);
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('j'))), KeyAction::MoveDown);
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key_event(&state, key(KeyCode::Delete)), KeyAction::None);
    }

    #[test]
    fn test_classic_list_keys() {
        let state = list_state(Variant::Classic);
        assert_eq!(
            handle_key_event(&state, key(KeyCode::Char('d'))),
            KeyAction::RemoveFocused
        );
        assert_eq!(handle_key_event(&state, key(KeyCode::Delete)), KeyAction::RemoveFocused);
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('e'))), KeyAction::BeginEdit);
        assert_eq!(handle_key_event(&state, key(KeyCode::Enter)), KeyAction::BeginEdit);
    }

    #[test]
    fn test_tab_prefers_visible_row_editor() {
        let mut state = list_state(Variant::Modal);
        assert_eq!(handle_key_event(&state, key(KeyCode::Tab)), KeyAction::FocusInput);

        state.store.set_items(vec!["a".into()]);
        state.store.switch_mode(Mode::Edit);
        state.store.select_row(0);
        assert_eq!(handle_key_event(&state, key(KeyCode::Tab)), KeyAction::FocusRowEdit);
    }

    #[test]
    fn test_row_edit_keys() {
        let mut state = AppState::new(Variant::Modal);
        state.focus = Focus::RowEdit;
        assert_eq!(handle_key_event(&state, key(KeyCode::Enter)), KeyAction::SaveEdit);
        assert_eq!(handle_key_event(&state, key(KeyCode::Esc)), KeyAction::FocusList);
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let mut state = list_state(Variant::Modal);
        state.show_help = true;
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('d'))), KeyAction::ToggleHelp);
    }

    #[test]
    fn test_update_input_buffer_insert() {
        let result = update_input_buffer(key(KeyCode::Char('x')), "ab", 1);
        assert_eq!(result, Some(("axb".to_string(), 2)));
    }

    #[test]
    fn test_update_input_buffer_multibyte() {
        let result = update_input_buffer(key(KeyCode::Backspace), "héllo", 2);
        assert_eq!(result, Some(("hllo".to_string(), 1)));

        let result = update_input_buffer(key(KeyCode::Char('ü')), "né", 2);
        assert_eq!(result, Some(("néü".to_string(), 3)));
    }

    #[test]
    fn test_update_input_buffer_edges() {
        assert_eq!(update_input_buffer(key(KeyCode::Backspace), "", 0), None);
        assert_eq!(update_input_buffer(key(KeyCode::Delete), "ab", 2), None);
        assert_eq!(update_input_buffer(key(KeyCode::Left), "ab", 0), None);
        assert_eq!(
            update_input_buffer(key(KeyCode::End), "ab", 0),
            Some(("ab".to_string(), 2))
        );
        assert_eq!(update_input_buffer(key(KeyCode::Enter), "ab", 1), None);
    }

    #[test]
    fn test_update_input_buffer_ignores_control_chars() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(update_input_buffer(ctrl_a, "", 0), None);

        let shift_a = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(update_input_buffer(shift_a, "", 0), Some(("A".to_string(), 1)));
    }

    #[test]
    fn test_insert_text_strips_newlines() {
        assert_eq!(insert_text("ac", 1, "b\r\n"), ("abc".to_string(), 2));
    }
}
