//! Error kinds surfaced by plugins and configuration loading.
//!
//! Model mutation and merging never fail, so nothing here is produced by
//! `input::*`. Unresolved binds and duplicate registrations are logged, not
//! raised.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading, validating, or parsing a plugin's source file.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File must be an XML file: {}", .0.display())]
    InvalidFileType(PathBuf),

    #[error("{reason}")]
    InvalidFormat { reason: String },

    #[error("No file has been selected for this plugin")]
    NoPathSet,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Plugin state error: {0}")]
    State(String),
}

impl PluginError {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        PluginError::InvalidFormat {
            reason: reason.into(),
        }
    }
}

/// Failures while reading `settings.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read settings {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse settings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not find user data directory")]
    NoDataDir,
}
