//! List editor state store
//!
//! Holds the five values that make up one editor instance and the
//! operations that mutate them. Every write replaces a whole value and
//! bumps `revision`, which the event loop compares against the revision it
//! last drew to decide whether a redraw is needed.

use super::list;
use super::{Mode, Variant};

/// State of one list editor
#[derive(Debug, Clone)]
pub struct Store {
    items: Vec<String>,
    pending_input: String,
    edit_cursor: Option<usize>,
    edit_text: String,
    /// `None` in the classic variant, which has no modes
    mode: Option<Mode>,
    revision: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl Store {
    /// Create an empty store for the given variant
    pub fn new(variant: Variant) -> Self {
        let mode = match variant {
            Variant::Modal => Some(Mode::Normal),
            Variant::Classic => None,
        };
        Self {
            items: Vec::new(),
            pending_input: String::new(),
            edit_cursor: None,
            edit_text: String::new(),
            mode,
            revision: 0,
        }
    }

    // --- read access ---

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn edit_cursor(&self) -> Option<usize> {
        self.edit_cursor
    }

    pub fn edit_text(&self) -> &str {
        &self.edit_text
    }

    /// Current mode, or `None` when the store has no modes
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn variant(&self) -> Variant {
        if self.mode.is_some() {
            Variant::Modal
        } else {
            Variant::Classic
        }
    }

    /// Counter bumped on every write
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- whole-value writes ---

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.touch();
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
        self.touch();
    }

    pub fn set_edit_cursor(&mut self, cursor: Option<usize>) {
        self.edit_cursor = cursor;
        self.touch();
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        self.edit_text = text.into();
        self.touch();
    }

    /// Set the mode. Ignored when the store has no modes.
    pub fn set_mode(&mut self, mode: Mode) {
        if let Some(current) = self.mode.as_mut() {
            *current = mode;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // --- operations ---

    /// Append the pending input as a new item and clear the input.
    ///
    /// Any text is accepted, including an empty string.
    pub fn append(&mut self) {
        let text = self.pending_input.clone();
        tracing::debug!(item = %text, index = self.items.len(), "append");
        self.set_items(list::appended(&self.items, &text));
        self.set_pending_input(String::new());
    }

    /// Remove the item at `index` and return to normal mode.
    ///
    /// An out-of-range index leaves the list as it was.
    pub fn remove_at(&mut self, index: usize) {
        tracing::debug!(index, len = self.items.len(), "remove");
        self.set_items(list::removed_at(&self.items, index));
        self.set_mode(Mode::Normal);
    }

    /// Replace the item at `index`, close the row editor and return to
    /// normal mode.
    pub fn replace_at(&mut self, index: usize, text: &str) {
        tracing::debug!(index, item = %text, "replace");
        self.set_items(list::replaced_at(&self.items, index, text));
        self.set_edit_cursor(None);
        self.set_edit_text(String::new());
        self.set_mode(Mode::Normal);
    }

    /// Open the row at `index` for editing, pre-filled with its text.
    ///
    /// Returns false when there is no such row.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        let Some(text) = self.items.get(index).cloned() else {
            return false;
        };
        tracing::debug!(index, "begin edit");
        self.set_edit_cursor(Some(index));
        self.set_edit_text(text);
        true
    }

    /// Commit the pending edit text to the row under edit.
    ///
    /// Returns the index that was saved, or `None` if no row was open.
    pub fn save_edit(&mut self) -> Option<usize> {
        let index = self.edit_cursor?;
        let text = self.edit_text.clone();
        self.replace_at(index, &text);
        Some(index)
    }

    /// Switch the interaction mode. Ignored when the store has no modes.
    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode.is_some() {
            tracing::debug!(mode = mode.display_name(), "switch mode");
        }
        self.set_mode(mode);
    }

    /// Apply the per-row gesture the current mode binds to a row.
    pub fn select_row(&mut self, index: usize) -> RowOutcome {
        match self.mode {
            Some(Mode::Delete) => {
                if index < self.items.len() {
                    self.remove_at(index);
                    RowOutcome::Removed(index)
                } else {
                    RowOutcome::Ignored
                }
            }
            Some(Mode::Edit) | None => {
                if self.begin_edit(index) {
                    RowOutcome::Editing(index)
                } else {
                    RowOutcome::Ignored
                }
            }
            Some(Mode::Normal) => RowOutcome::Ignored,
        }
    }

    /// Whether the in-place row editor is currently shown.
    ///
    /// A cursor left pointing past the end of the list (its row was
    /// removed in delete mode) shows no editor.
    pub fn row_editor_visible(&self) -> bool {
        self.edit_cursor.is_some_and(|i| i < self.items.len())
            && matches!(self.mode, Some(Mode::Edit) | None)
    }
}

/// What selecting a row did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Nothing happened (normal mode, or no such row)
    Ignored,
    /// The row was removed
    Removed(usize),
    /// The row was opened for editing
    Editing(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(items: &[&str]) -> Store {
        let mut store = Store::new(Variant::Modal);
        store.set_items(items.iter().map(|s| s.to_string()).collect());
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new(Variant::Modal);
        assert!(store.is_empty());
        assert_eq!(store.pending_input(), "");
        assert_eq!(store.edit_cursor(), None);
        assert_eq!(store.edit_text(), "");
        assert_eq!(store.mode(), Some(Mode::Normal));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_classic_store_has_no_mode() {
        let store = Store::new(Variant::Classic);
        assert_eq!(store.mode(), None);
        assert_eq!(store.variant(), Variant::Classic);
    }

    #[test]
    fn test_append_scenario() {
        let mut store = Store::default();
        store.set_pending_input("Buy milk");
        store.append();
        assert_eq!(store.items(), ["Buy milk"]);
        assert_eq!(store.pending_input(), "");

        store.set_pending_input("Walk dog");
        store.append();
        assert_eq!(store.items(), ["Buy milk", "Walk dog"]);

        store.remove_at(0);
        assert_eq!(store.items(), ["Walk dog"]);

        store.replace_at(0, "Walk the dog");
        assert_eq!(store.items(), ["Walk the dog"]);
    }

    #[test]
    fn test_append_empty_input() {
        let mut store = Store::default();
        store.append();
        assert_eq!(store.items(), [""]);
    }

    #[test]
    fn test_writes_bump_revision() {
        let mut store = Store::default();
        let before = store.revision();
        store.set_pending_input("x");
        assert!(store.revision() > before);

        let before = store.revision();
        store.append();
        assert!(store.revision() > before);
    }

    #[test]
    fn test_remove_out_of_range_keeps_list() {
        let mut store = store_with(&["a"]);
        store.switch_mode(Mode::Delete);
        store.remove_at(3);
        assert_eq!(store.items(), ["a"]);
        assert_eq!(store.mode(), Some(Mode::Normal));
    }

    #[test]
    fn test_delete_mode_scenario() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.mode(), Some(Mode::Normal));
        store.switch_mode(Mode::Delete);
        assert_eq!(store.select_row(0), RowOutcome::Removed(0));
        assert_eq!(store.items(), ["b"]);
        assert_eq!(store.mode(), Some(Mode::Normal));
    }

    #[test]
    fn test_edit_mode_scenario() {
        let mut store = store_with(&["a", "b"]);
        store.switch_mode(Mode::Edit);
        assert_eq!(store.select_row(1), RowOutcome::Editing(1));
        assert_eq!(store.edit_cursor(), Some(1));
        assert_eq!(store.edit_text(), "b");

        store.set_edit_text("bee");
        assert_eq!(store.save_edit(), Some(1));
        assert_eq!(store.items(), ["a", "bee"]);
        assert_eq!(store.edit_cursor(), None);
        assert_eq!(store.edit_text(), "");
        assert_eq!(store.mode(), Some(Mode::Normal));
    }

    #[test]
    fn test_normal_mode_rows_are_inert() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.select_row(0), RowOutcome::Ignored);
        assert_eq!(store.items(), ["a"]);
        assert_eq!(store.edit_cursor(), None);
    }

    #[test]
    fn test_select_missing_row_is_ignored() {
        let mut store = store_with(&["a"]);
        store.switch_mode(Mode::Delete);
        assert_eq!(store.select_row(4), RowOutcome::Ignored);
        assert_eq!(store.mode(), Some(Mode::Delete));

        store.switch_mode(Mode::Edit);
        assert_eq!(store.select_row(4), RowOutcome::Ignored);
        assert_eq!(store.edit_cursor(), None);
    }

    #[test]
    fn test_switch_mode_from_any_state() {
        let mut store = Store::default();
        store.switch_mode(Mode::Edit);
        store.switch_mode(Mode::Delete);
        assert_eq!(store.mode(), Some(Mode::Delete));
        store.switch_mode(Mode::Edit);
        assert_eq!(store.mode(), Some(Mode::Edit));
    }

    #[test]
    fn test_edit_switches_rows() {
        let mut store = store_with(&["a", "b"]);
        store.switch_mode(Mode::Edit);
        store.select_row(0);
        store.set_edit_text("changed");
        store.select_row(1);
        assert_eq!(store.edit_cursor(), Some(1));
        assert_eq!(store.edit_text(), "b");
        assert_eq!(store.items(), ["a", "b"]);
    }

    #[test]
    fn test_save_without_open_row() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.save_edit(), None);
        assert_eq!(store.items(), ["a"]);
    }

    #[test]
    fn test_classic_mode_reset_is_noop() {
        let mut store = Store::new(Variant::Classic);
        store.set_items(vec!["a".into(), "b".into()]);
        store.switch_mode(Mode::Delete);
        assert_eq!(store.mode(), None);

        assert_eq!(store.select_row(1), RowOutcome::Editing(1));
        assert!(store.row_editor_visible());
        store.set_edit_text("B");
        store.save_edit();
        assert_eq!(store.items(), ["a", "B"]);
        assert_eq!(store.mode(), None);

        store.remove_at(0);
        assert_eq!(store.items(), ["B"]);
        assert_eq!(store.mode(), None);
    }

    #[test]
    fn test_row_editor_hidden_outside_edit_mode() {
        let mut store = store_with(&["a"]);
        store.switch_mode(Mode::Edit);
        store.select_row(0);
        assert!(store.row_editor_visible());
        store.switch_mode(Mode::Delete);
        assert!(!store.row_editor_visible());
        // the cursor survives a mode switch
        assert_eq!(store.edit_cursor(), Some(0));
    }

    #[test]
    fn test_stale_cursor_shows_no_editor() {
        let mut store = store_with(&["a", "b"]);
        store.switch_mode(Mode::Edit);
        store.select_row(1);
        store.switch_mode(Mode::Delete);
        store.select_row(1);
        store.switch_mode(Mode::Edit);

        assert_eq!(store.items(), ["a"]);
        assert_eq!(store.edit_cursor(), Some(1));
        assert!(!store.row_editor_visible());
    }
}
