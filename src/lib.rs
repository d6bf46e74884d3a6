//! Temple - pick a template file and drop it into the working directory
//!
//! A catalog of template files is described in a JSON config. The user
//! filters it interactively, previews the head of each candidate and the
//! chosen file is copied into the current directory or onto the clipboard.

use std::path::PathBuf;
use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod install;
pub mod matcher;
pub mod paths;
pub mod preview;
pub mod selector;
pub mod template;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TempleError {
    /// The config file does not exist
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
    /// The config file exists but could not be parsed
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] ::config::ConfigError),
    /// The user cancelled the template picker
    #[error("Selection aborted")]
    SelectionAborted,
    /// The chosen template could not be opened for reading
    #[error("Failed to open template {}: {source}", path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The destination file could not be created or written
    #[error("Failed to write {}: {source}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Clipboard access failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    /// Fetching the default config failed
    #[error("Download failed: {0}")]
    Download(String),
    /// The home directory of the current user is unknown
    #[error("Could not determine home directory")]
    NoHomeDir,
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Prompt error
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TempleError {
    /// Process exit code for this error
    ///
    /// An aborted selection is not a failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SelectionAborted => 0,
            _ => 1,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, TempleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TempleError::SelectionAborted.exit_code(), 0);
        assert_eq!(TempleError::NoHomeDir.exit_code(), 1);
        assert_eq!(
            TempleError::ConfigNotFound(PathBuf::from("/tmp/temple.json")).exit_code(),
            1
        );
        assert_eq!(TempleError::Download("boom".into()).exit_code(), 1);
    }

    #[test]
    fn test_source_open_message_names_path() {
        let err = TempleError::SourceOpen {
            path: PathBuf::from("/tmp/missing.go"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/missing.go"));
        assert!(message.contains("no such file"));
    }
}
