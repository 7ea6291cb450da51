//! List rendering

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::layout::{
    scroll_offset, to_col, ScreenLayout, ROW_BUTTONS_WIDTH, SAVE_BUTTON_WIDTH,
};
use super::theme::Theme;
use crate::core::{AppState, Focus, Mode};

/// Render the item list and return the caret position of the row editor,
/// if it has focus and is on screen
pub fn render_list(
    frame: &mut Frame,
    state: &AppState,
    layout: &ScreenLayout,
    theme: &Theme,
) -> Option<Position> {
    let area = layout.list;
    let list_focused = matches!(state.focus, Focus::List | Focus::RowEdit);
    let border_style = if list_focused {
        Style::default().fg(theme.border_active)
    } else {
        Style::default().fg(theme.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Items ({}) ", state.store.len()));

    if state.store.is_empty() {
        let para = Paragraph::new(Line::from(Span::styled(
            "No items yet",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .block(block);
        frame.render_widget(para, area);
        return None;
    }

    let inner = layout.list_inner();
    let visible = inner.height as usize;

    let items: Vec<ListItem> = state
        .store
        .items()
        .iter()
        .enumerate()
        .skip(state.viewport_top)
        .take(visible)
        .map(|(index, text)| render_row(state, theme, index, text, inner.width))
        .collect();

    frame.render_widget(List::new(items).block(block), area);

    caret_position(state, inner)
}

/// Render a single row as a ListItem
fn render_row(
    state: &AppState,
    theme: &Theme,
    index: usize,
    text: &str,
    width: u16,
) -> ListItem<'static> {
    let prefix = row_prefix(state, index);
    let is_focused = index == state.focus_index && state.focus == Focus::List;
    let editing_here =
        state.store.row_editor_visible() && state.store.edit_cursor() == Some(index);

    let mut base = Style::default().fg(theme.foreground);
    if is_focused {
        base = base.bg(theme.selection).add_modifier(Modifier::BOLD);
    }

    let line = if editing_here {
        let avail = editor_width(width, prefix.chars().count());
        let offset = scroll_offset(state.edit_caret, avail);
        let shown: String = state.store.edit_text().chars().skip(offset).collect();
        Line::from(vec![
            Span::styled(prefix, base),
            Span::styled(
                pad(&shown, avail),
                Style::default()
                    .fg(theme.edit)
                    .add_modifier(Modifier::REVERSED),
            ),
            Span::styled("[Save]", Style::default().fg(theme.edit)),
        ])
    } else {
        match state.mode() {
            Some(Mode::Normal) => Line::from(vec![
                Span::styled(prefix, base),
                Span::styled(text.to_string(), base),
            ]),
            Some(Mode::Delete) => Line::from(vec![
                Span::styled(prefix, base),
                Span::styled(
                    text.to_string(),
                    base.fg(theme.delete).add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Some(Mode::Edit) => Line::from(vec![
                Span::styled(prefix, base),
                Span::styled(
                    text.to_string(),
                    base.fg(theme.edit).add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            None => {
                let avail = width
                    .saturating_sub(ROW_BUTTONS_WIDTH)
                    .saturating_sub(to_col(prefix.chars().count()))
                    as usize;
                Line::from(vec![
                    Span::styled(prefix, base),
                    Span::styled(pad(text, avail), base),
                    Span::styled("[e]", Style::default().fg(theme.edit)),
                    Span::raw(" "),
                    Span::styled("[x]", Style::default().fg(theme.delete)),
                ])
            }
        }
    };

    ListItem::new(line)
}

fn row_prefix(state: &AppState, index: usize) -> String {
    if state.show_numbers {
        format!("{}. ", index + 1)
    } else {
        String::new()
    }
}

/// Truncate or right-pad `text` to exactly `width` chars
fn pad(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

/// Terminal position of the row editor caret
fn caret_position(state: &AppState, inner: Rect) -> Option<Position> {
    if state.focus != Focus::RowEdit || !state.store.row_editor_visible() {
        return None;
    }
    let index = state.store.edit_cursor()?;
    if index < state.viewport_top || index >= state.viewport_top + inner.height as usize {
        return None;
    }
    let prefix = row_prefix(state, index).chars().count();
    let offset = scroll_offset(state.edit_caret, editor_width(inner.width, prefix));
    let max_col = inner.width.saturating_sub(SAVE_BUTTON_WIDTH + 1);
    let col = to_col(prefix)
        .saturating_add(to_col(state.edit_caret - offset))
        .min(max_col);
    Some(Position::new(
        inner.x.saturating_add(col),
        inner.y.saturating_add(to_col(index - state.viewport_top)),
    ))
}

/// Columns left for the edit text between the row prefix and `[Save]`
fn editor_width(row_width: u16, prefix_chars: usize) -> usize {
    usize::from(row_width.saturating_sub(SAVE_BUTTON_WIDTH)).saturating_sub(prefix_chars)
}
