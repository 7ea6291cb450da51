//! Application state management

use super::{Focus, Mode, Store, Variant};

/// Main application state
///
/// Wraps the editor [`Store`] together with presentation-only state
/// (row focus, scrolling, text carets, status message).
pub struct AppState {
    /// Editor values
    pub store: Store,
    /// Which region receives keyboard input
    pub focus: Focus,
    /// Focused row in the list
    pub focus_index: usize,
    /// Top of viewport (scroll position)
    pub viewport_top: usize,
    /// Caret position (in chars) in the new-item input
    pub input_caret: usize,
    /// Caret position (in chars) in the row editor
    pub edit_caret: usize,
    /// Status message
    pub message: Option<String>,
    /// Help popup visibility
    pub show_help: bool,
    /// Whether to prefix rows with their number
    pub show_numbers: bool,
    /// Title shown above the input
    pub title: String,
    /// Exit flag
    pub should_quit: bool,
}

impl AppState {
    /// Create new application state with an empty list
    pub fn new(variant: Variant) -> Self {
        Self {
            store: Store::new(variant),
            focus: Focus::Input,
            focus_index: 0,
            viewport_top: 0,
            input_caret: 0,
            edit_caret: 0,
            message: None,
            show_help: false,
            show_numbers: false,
            title: "My Todo List".to_string(),
            should_quit: false,
        }
    }

    pub fn variant(&self) -> Variant {
        self.store.variant()
    }

    /// Mode to show in the status bar, if the variant has modes
    pub fn mode(&self) -> Option<Mode> {
        self.store.mode()
    }

    /// Keep the row focus inside the list
    pub fn clamp_focus(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.focus_index = 0;
        } else if self.focus_index >= len {
            self.focus_index = len - 1;
        }
    }

    /// Drop out of row editing when the row editor is no longer shown
    pub fn sync_focus(&mut self) {
        if self.focus == Focus::RowEdit && !self.store.row_editor_visible() {
            self.focus = Focus::List;
        }
    }

    /// Adjust viewport to keep focus visible
    pub fn adjust_viewport(&mut self, visible_height: usize) {
        if self.focus_index < self.viewport_top {
            self.viewport_top = self.focus_index;
        } else if visible_height > 0 && self.focus_index >= self.viewport_top + visible_height {
            self.viewport_top = self.focus_index.saturating_sub(visible_height) + 1;
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
