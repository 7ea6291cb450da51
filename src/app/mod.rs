//! Application module
//!
//! Command-line handling, configuration, logging and the event loop
//! that ties the store, handlers and renderer together.

mod config;
mod config_file;
mod event_loop;
pub mod logging;
mod render;

pub use config::{print_help, CliArgs, CliCommand, Config};
pub use config_file::ConfigFile;
pub use event_loop::{initial_state, run_app, AppResult};
pub use render::{render_frame, RenderContext};

/// Process exit codes
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error (terminal, config or log file)
    pub const ERROR: i32 = 2;
    /// Invalid command-line arguments
    pub const INVALID: i32 = 3;
}
