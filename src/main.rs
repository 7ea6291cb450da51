//! listedit - a small list editor for the terminal

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use listedit::app::{exit_code, logging, print_help, run_app, CliArgs, CliCommand, Config};

fn main() -> ExitCode {
    // Parse arguments first to return INVALID exit code for argument errors
    let cli = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(CliCommand::Run(cli)) => cli,
        Ok(CliCommand::Help) => {
            print_help();
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        Ok(CliCommand::Version) => {
            println!("listedit {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    if let Err(e) = logging::init(cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::from(exit_code::ERROR as u8);
    }

    let config = match Config::resolve(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::ERROR as u8);
        }
    };

    match run_with_config(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            tracing::error!(error = %e, "editor failed");
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn run_with_config(config: Config) -> anyhow::Result<i32> {
    let mouse_enabled = config.mouse_enabled;

    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config);

    // Restore terminal
    terminal::disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        cursor::Show
    )?;

    result.map(|app_result| app_result.exit_code)
}
