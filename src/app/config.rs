//! Application configuration from CLI arguments

use std::path::PathBuf;

use super::config_file::ConfigFile;
use crate::core::Variant;
use crate::render::ColorsConfig;

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Start the editor
    Run(CliArgs),
    /// Print usage and exit
    Help,
    /// Print version and exit
    Version,
}

/// Options given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub variant: Option<Variant>,
    pub mouse_enabled: Option<bool>,
    pub title: Option<String>,
    pub show_numbers: Option<bool>,
    /// Explicit config file; failing to load it is an error
    pub config_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments (without the program name)
    pub fn parse<I>(args: I) -> anyhow::Result<CliCommand>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut cli = CliArgs::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--classic" => cli.variant = Some(Variant::Classic),
                "--modal" => cli.variant = Some(Variant::Modal),
                "--mouse" => cli.mouse_enabled = Some(true),
                "--no-mouse" => cli.mouse_enabled = Some(false),
                "--numbers" | "-n" => cli.show_numbers = Some(true),
                "--title" | "-t" => {
                    let Some(title) = args.next() else {
                        anyhow::bail!("--title requires a value");
                    };
                    cli.title = Some(title);
                }
                "--config" | "-c" => {
                    let Some(path) = args.next() else {
                        anyhow::bail!("--config requires a file path");
                    };
                    cli.config_path = Some(PathBuf::from(path));
                }
                "--log-file" => {
                    let Some(path) = args.next() else {
                        anyhow::bail!("--log-file requires a file path");
                    };
                    cli.log_file = Some(PathBuf::from(path));
                }
                "--help" | "-h" => return Ok(CliCommand::Help),
                "--version" | "-V" => return Ok(CliCommand::Version),
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        Ok(CliCommand::Run(cli))
    }
}

/// Application configuration from CLI args and config file
#[derive(Debug, Clone)]
pub struct Config {
    pub variant: Variant,
    pub mouse_enabled: bool,
    pub title: String,
    pub show_numbers: bool,
    pub colors: ColorsConfig,
}

impl Config {
    /// Load the config file and apply CLI overrides
    pub fn resolve(cli: &CliArgs) -> anyhow::Result<Self> {
        let file = match &cli.config_path {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::load(),
        };
        Ok(Self::merge(cli, file))
    }

    /// Merge config file settings with CLI overrides.
    /// CLI arguments take precedence over the config file.
    pub fn merge(cli: &CliArgs, file: ConfigFile) -> Self {
        Self {
            variant: cli.variant.unwrap_or(file.general.variant),
            mouse_enabled: cli.mouse_enabled.unwrap_or(file.general.mouse_enabled),
            title: cli.title.clone().unwrap_or(file.ui.title),
            show_numbers: cli.show_numbers.unwrap_or(file.ui.show_numbers),
            colors: file.colors,
        }
    }
}

pub fn print_help() {
    println!(
        r#"listedit - a small list editor for the terminal

USAGE:
    listedit [OPTIONS]

OPTIONS:
    --modal             Mode buttons (Delete / Edit) gate row actions (default)
    --classic           Every row has its own edit and delete buttons
    --no-mouse          Disable mouse support
    --mouse             Enable mouse support (default)
    -t, --title TEXT    Heading shown above the input
    -n, --numbers       Number the rows
    -c, --config PATH   Read configuration from PATH
    --log-file PATH     Write diagnostics to PATH
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/listedit/config.toml

ENVIRONMENT:
    LISTEDIT_LOG        Log file path (same as --log-file)
    RUST_LOG            Log filter, e.g. "listedit=debug" (default: info)

KEYBINDINGS:
    Enter       Add item (input) / select row (list) / save (row editor)
    Tab/Esc     Move between input and list
    j/k ↑/↓     Move in list
    d           Delete mode (classic: delete row)
    e           Edit mode (classic: edit row)
    ?           Show help
    q           Quit (from the list)
    Ctrl+C      Quit

EXIT CODES:
    0           Success
    2           Error (runtime error)
    3           Invalid arguments (unknown option or missing value)
"#
    );
}
