//! Mouse event handling

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Rows moved per scroll wheel notch
const SCROLL_AMOUNT: usize = 1;

/// Actions triggered by mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    None,
    Click { col: u16, row: u16 },
    ScrollUp(usize),
    ScrollDown(usize),
}

/// Translate a raw mouse event into a mouse action
pub fn handle_mouse_event(event: MouseEvent) -> MouseAction {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Click {
            col: event.column,
            row: event.row,
        },
        MouseEventKind::ScrollUp => MouseAction::ScrollUp(SCROLL_AMOUNT),
        MouseEventKind::ScrollDown => MouseAction::ScrollDown(SCROLL_AMOUNT),
        _ => MouseAction::None,
    }
}
