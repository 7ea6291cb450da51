//! Main event loop for the application

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::app::{exit_code, Config};
use crate::core::AppState;
use crate::handler::{
    apply_paste, apply_text_key, handle_action, handle_key_event, handle_mouse_action,
    handle_mouse_event, ActionResult,
};
use crate::render::{ScreenLayout, Theme};

use super::render::{render_frame, RenderContext};

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
}

/// Build the initial state from the resolved config
pub fn initial_state(config: &Config) -> AppState {
    let mut state = AppState::new(config.variant);
    state.title = config.title.clone();
    state.show_numbers = config.show_numbers;
    state
}

/// Main event loop
///
/// Redraws only when the store revision moved or an event touched
/// presentation state (focus, carets, resize).
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<AppResult> {
    let mut state = initial_state(&config);
    let theme = Theme::from_config(&config.colors);

    let mut drawn_revision: Option<u64> = None;
    let mut ui_dirty = true;

    tracing::info!(variant = %config.variant, mouse = config.mouse_enabled, "editor started");

    loop {
        let size = terminal.size()?;
        let layout = ScreenLayout::new(Rect::new(0, 0, size.width, size.height), state.variant());
        state.adjust_viewport(layout.visible_rows());

        let revision = state.store.revision();
        if ui_dirty || drawn_revision != Some(revision) {
            terminal.draw(|frame| {
                render_frame(
                    frame,
                    RenderContext {
                        state: &state,
                        layout: &layout,
                        theme: &theme,
                    },
                )
            })?;
            drawn_revision = Some(revision);
            ui_dirty = false;
        }

        // Handle events (60ms timeout balances responsiveness and CPU usage)
        if !event::poll(Duration::from_millis(60))? {
            continue;
        }

        let result = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                ui_dirty = true;
                // Text editing keys go to the focused input first
                if !state.show_help && apply_text_key(key, &mut state) {
                    continue;
                }
                let action = handle_key_event(&state, key);
                handle_action(action, &mut state)
            }
            Event::Mouse(mouse) if config.mouse_enabled => {
                ui_dirty = true;
                handle_mouse_action(handle_mouse_event(mouse), &mut state, &layout)
            }
            Event::Paste(text) => {
                ui_dirty = apply_paste(&text, &mut state);
                ActionResult::Continue
            }
            Event::Resize(..) => {
                ui_dirty = true;
                ActionResult::Continue
            }
            _ => ActionResult::Continue,
        };

        if let ActionResult::Quit(code) = result {
            tracing::info!(items = state.store.len(), "editor closed");
            return Ok(AppResult { exit_code: code });
        }

        if state.should_quit {
            return Ok(AppResult {
                exit_code: exit_code::SUCCESS,
            });
        }
    }
}
