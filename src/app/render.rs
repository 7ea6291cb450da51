//! Rendering helpers for the event loop

use ratatui::prelude::*;

use crate::core::AppState;
use crate::render::{
    render_help_popup, render_input_bar, render_list, render_status_bar, render_title,
    ScreenLayout, Theme,
};

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub layout: &'a ScreenLayout,
    pub theme: &'a Theme,
}

/// Render a complete frame
pub fn render_frame(frame: &mut Frame, ctx: RenderContext) {
    render_title(frame, ctx.state, ctx.layout.title);
    let input_caret = render_input_bar(frame, ctx.state, ctx.layout, ctx.theme);
    let row_caret = render_list(frame, ctx.state, ctx.layout, ctx.theme);
    render_status_bar(frame, ctx.state, ctx.layout.status, ctx.theme);
    render_help_popup(frame, ctx.state, ctx.theme);

    if !ctx.state.show_help {
        if let Some(pos) = input_caret.or(row_caret) {
            frame.set_cursor_position(pos);
        }
    }
}
