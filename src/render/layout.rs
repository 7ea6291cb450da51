//! Screen layout shared by rendering and mouse hit-testing
//!
//! The renderer draws into the rectangles computed here and the mouse
//! handler maps click positions back through the same rectangles, so the
//! two can never disagree about where a button is.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::core::{AppState, Variant};

/// Width of the `[Save]` button at the end of the row editor
pub const SAVE_BUTTON_WIDTH: u16 = 6;
/// Width of the `[e] [x]` button pair at the end of a classic row
pub const ROW_BUTTONS_WIDTH: u16 = 7;

/// First visible char of a one-line text field `width` columns wide,
/// chosen so the caret (a char index) stays on screen
pub fn scroll_offset(caret: usize, width: usize) -> usize {
    (caret + 1).saturating_sub(width.max(1))
}

/// Char count clamped into a terminal column
pub fn to_col(chars: usize) -> u16 {
    u16::try_from(chars).unwrap_or(u16::MAX)
}

/// Toolbar buttons next to the new-item input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Add,
    Delete,
    Edit,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Button::Add => "Add",
            Button::Delete => "Delete",
            Button::Edit => "Edit",
        }
    }

    /// Width including borders and one space of padding on each side
    fn width(&self) -> u16 {
        self.label().len() as u16 + 4
    }
}

/// Buttons drawn inside a list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowButton {
    /// `[Save]` on the row editor
    Save,
    /// `[e]` on a classic row
    Edit,
    /// `[x]` on a classic row
    Remove,
}

/// Result of hit-testing a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    None,
    Input,
    Button(Button),
    Row(usize),
    RowButton { index: usize, button: RowButton },
}

/// Computed screen regions for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub buttons: Vec<(Button, Rect)>,
    pub list: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    /// Compute the layout for a terminal area
    pub fn new(area: Rect, variant: Variant) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let toolbar: &[Button] = match variant {
            Variant::Modal => &[Button::Add, Button::Delete, Button::Edit],
            Variant::Classic => &[Button::Add],
        };

        let mut constraints = vec![Constraint::Min(10)];
        constraints.extend(toolbar.iter().map(|b| Constraint::Length(b.width())));
        let input_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[1]);

        let buttons = toolbar
            .iter()
            .zip(input_row.iter().skip(1))
            .map(|(b, r)| (*b, *r))
            .collect();

        Self {
            title: rows[0],
            input: input_row[0],
            buttons,
            list: rows[2],
            status: rows[3],
        }
    }

    /// Inner list area (inside the border)
    pub fn list_inner(&self) -> Rect {
        Rect {
            x: self.list.x.saturating_add(1),
            y: self.list.y.saturating_add(1),
            width: self.list.width.saturating_sub(2),
            height: self.list.height.saturating_sub(2),
        }
    }

    /// Number of rows the list can show
    pub fn visible_rows(&self) -> usize {
        self.list_inner().height as usize
    }

    /// Map a screen position to the element under it
    pub fn hit(&self, col: u16, row: u16, state: &AppState) -> Hit {
        let pos = Position::new(col, row);

        if self.input.contains(pos) {
            return Hit::Input;
        }
        if let Some((button, _)) = self.buttons.iter().find(|(_, r)| r.contains(pos)) {
            return Hit::Button(*button);
        }

        let inner = self.list_inner();
        if !inner.contains(pos) {
            return Hit::None;
        }
        let index = state.viewport_top + (row - inner.y) as usize;
        if index >= state.store.len() {
            return Hit::None;
        }

        let right = inner.x + inner.width;
        let editing_here =
            state.store.row_editor_visible() && state.store.edit_cursor() == Some(index);
        if editing_here {
            if col >= right.saturating_sub(SAVE_BUTTON_WIDTH) {
                return Hit::RowButton {
                    index,
                    button: RowButton::Save,
                };
            }
            return Hit::Row(index);
        }

        if state.variant() == Variant::Classic {
            let start = right.saturating_sub(ROW_BUTTONS_WIDTH);
            if col >= start && col < start + 3 {
                return Hit::RowButton {
                    index,
                    button: RowButton::Edit,
                };
            }
            if col >= right.saturating_sub(3) {
                return Hit::RowButton {
                    index,
                    button: RowButton::Remove,
                };
            }
        }

        Hit::Row(index)
    }
}
