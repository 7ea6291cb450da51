//! Unified error types for listedit
//!
//! List operations never fail; these cover the ambient edges
//! (terminal I/O, config files, log output).

use std::path::PathBuf;

/// Unified error type for listedit operations
#[derive(Debug, thiserror::Error)]
pub enum ListeditError {
    /// I/O errors (terminal, files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Config error: {path} - {reason}")]
    Config { path: PathBuf, reason: String },

    /// Logging setup errors
    #[error("Log error: {0}")]
    Log(String),
}

/// Convenience Result type using ListeditError
pub type Result<T> = std::result::Result<T, ListeditError>;

impl ListeditError {
    /// Create a Config error
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Log error
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }
}
