//! Diagnostic logging
//!
//! The terminal belongs to the UI, so logs only go to a file: the one
//! given with `--log-file`, else the path in `LISTEDIT_LOG`. With neither
//! set, no subscriber is installed and `tracing` macros are no-ops.
//!
//! ```bash
//! RUST_LOG=listedit=debug listedit --log-file /tmp/listedit.log
//! ```

use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ListeditError, Result};

/// Environment variable naming the log file
pub const LOG_ENV: &str = "LISTEDIT_LOG";

/// Pick the log file: CLI flag first, then the environment
pub fn resolve_log_path(cli: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
    cli.map(Path::to_path_buf).or_else(|| {
        env_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    })
}

/// Initialize the tracing subscriber.
///
/// Returns whether a subscriber was installed.
pub fn init(cli_log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = resolve_log_path(cli_log_file, env::var(LOG_ENV).ok()) else {
        return Ok(false);
    };
    init_with_file(&path)?;
    Ok(true)
}

fn init_with_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| ListeditError::log(e.to_string()))
}
