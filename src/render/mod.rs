//! Render module - UI rendering

pub mod layout;
pub mod list;
pub mod status;
pub mod theme;

pub use layout::{Button, Hit, RowButton, ScreenLayout};
pub use list::render_list;
pub use status::{render_help_popup, render_input_bar, render_status_bar, render_title};
pub use theme::{parse_color, ColorsConfig, Theme};
