//! Title, input box, toolbar, status bar and help popup rendering

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::{scroll_offset, to_col, Button, ScreenLayout};
use super::theme::Theme;
use crate::core::{AppState, Focus, Mode, Variant};

/// Render the title line
pub fn render_title(frame: &mut Frame, state: &AppState, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        state.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

/// Render the new-item input box and toolbar buttons.
///
/// Returns the caret position when the input has focus.
pub fn render_input_bar(
    frame: &mut Frame,
    state: &AppState,
    layout: &ScreenLayout,
    theme: &Theme,
) -> Option<Position> {
    let focused = state.focus == Focus::Input;
    let border_style = if focused {
        Style::default().fg(theme.border_active)
    } else {
        Style::default().fg(theme.border)
    };

    let field_width = usize::from(layout.input.width.saturating_sub(2));
    let offset = scroll_offset(state.input_caret, field_width);
    let input = Paragraph::new(state.store.pending_input().to_string())
        .scroll((0, to_col(offset)))
        .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" New item "),
    );
    frame.render_widget(input, layout.input);

    for (button, area) in &layout.buttons {
        let active = match (button, state.mode()) {
            (Button::Delete, Some(Mode::Delete)) => Some(theme.delete),
            (Button::Edit, Some(Mode::Edit)) => Some(theme.edit),
            _ => None,
        };
        let style = match active {
            Some(color) => Style::default().fg(color).add_modifier(Modifier::BOLD),
            None => Style::default(),
        };
        let widget = Paragraph::new(format!(" {} ", button.label()))
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(widget, *area);
    }

    if !focused {
        return None;
    }
    let max_col = layout.input.width.saturating_sub(3);
    let col = to_col(state.input_caret - offset).min(max_col);
    Some(Position::new(
        layout.input.x.saturating_add(1 + col),
        layout.input.y.saturating_add(1),
    ))
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect, theme: &Theme) {
    let message = state.message.as_deref().unwrap_or("? for help");

    let mode_span = match state.mode() {
        Some(mode) => {
            let color = match mode {
                Mode::Normal => theme.foreground,
                Mode::Delete => theme.delete,
                Mode::Edit => theme.edit,
            };
            Span::styled(
                format!("{} | ", mode.display_name()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => Span::raw(""),
    };

    let count = state.store.len();
    let line = Line::from(vec![
        Span::styled(format!(" {}", message), Style::default().fg(theme.info)),
        Span::raw("  "),
        mode_span,
        Span::raw(format!(
            "{} item{}",
            count,
            if count == 1 { "" } else { "s" }
        )),
    ]);

    let widget = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Key binding lines for the help popup
fn help_lines(variant: Variant) -> Vec<(&'static str, &'static str)> {
    let mut lines = vec![
        ("Enter", "Add item (in input)"),
        ("Tab/Esc", "Switch between input and list"),
        ("j/k ↑/↓", "Move in list"),
        ("g/G", "First / last item"),
        ("i/a", "Focus input"),
    ];
    match variant {
        Variant::Modal => lines.extend([
            ("d", "Delete mode"),
            ("e", "Edit mode"),
            ("Enter/Space", "Select item (delete or edit)"),
        ]),
        Variant::Classic => lines.extend([
            ("e/Enter", "Edit item"),
            ("d/Del", "Delete item"),
        ]),
    }
    lines.extend([
        ("Enter", "Save (in row editor)"),
        ("q/Esc", "Quit (in list)"),
        ("Ctrl+C", "Quit"),
    ]);
    lines
}

/// Render help popup when visible
pub fn render_help_popup(frame: &mut Frame, state: &AppState, theme: &Theme) {
    if !state.show_help {
        return;
    }

    let entries = help_lines(state.variant());
    let area = frame.area();
    let width = 50.min(area.width);
    let height = (entries.len() as u16 + 2).min(area.height);
    let popup = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let lines: Vec<Line> = entries
        .into_iter()
        .map(|(k, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<12}", k),
                    Style::default()
                        .fg(theme.border_active)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(desc),
            ])
        })
        .collect();

    frame.render_widget(Clear, popup);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_active))
            .title(" Help (any key to close) "),
    );
    frame.render_widget(widget, popup);
}
