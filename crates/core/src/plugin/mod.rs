//! The contract every format-specific parser implements.
//!
//! A host drives a plugin as: `load_plugin_state` (optional) → `set_path` →
//! `process`. `set_path` swallows load/validation failures and reports them as
//! `false`; nothing escapes the plugin boundary as a panic.

pub mod state;

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::PluginError;
use crate::input::profile_collection::ProfileCollection;
use crate::plugin::state::PluginState;

/// File-picker descriptor the GUI shows for a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath {
    pub prompt: String,
    pub default_path: PathBuf,
    pub extensions: Vec<String>,
}

impl FilePath {
    pub fn new(prompt: &str, default_path: PathBuf, extensions: &[&str]) -> Self {
        FilePath {
            prompt: prompt.to_string(),
            default_path,
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// True if `path` ends in one of `extensions` (given with or without the dot).
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|want| want.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
}

pub trait Plugin {
    /// Stable id; also names the plugin's data and asset dirs.
    fn id(&self) -> &'static str;

    /// Human-facing name.
    fn name(&self) -> &'static str;

    fn settings(&self) -> &Settings;

    /// Load and validate `path`. On success the path is remembered and persisted.
    fn set_path(&mut self, path: &Path) -> bool;

    /// Currently selected (validated) file, if any.
    fn path(&self) -> Option<&Path>;

    /// Parse the file accepted by the last successful `set_path`.
    fn process(&self) -> Result<ProfileCollection, PluginError>;

    fn path_type(&self) -> FilePath;

    fn icon(&self) -> PathBuf {
        let settings = self.settings();
        settings
            .plugin_assets_dir(self.id())
            .join(&settings.plugin_icon)
    }

    fn plugin_data_dir(&self) -> Result<PathBuf, PluginError> {
        self.settings()
            .plugin_data_dir(self.id())
            .map_err(|e| PluginError::State(e.to_string()))
    }

    fn save_plugin_state(&self) -> Result<(), PluginError> {
        let path = self.path().ok_or(PluginError::NoPathSet)?;
        PluginState::for_path(path).save(&self.plugin_data_dir()?)?;
        Ok(())
    }

    /// Re-select the path saved by a previous run. Returns whether a stored
    /// path was found and still validates.
    fn load_plugin_state(&mut self) -> Result<bool, PluginError> {
        let stored = PluginState::load(&self.plugin_data_dir()?)?;
        match stored.and_then(|s| s.path) {
            Some(path) => Ok(self.set_path(&path)),
            None => Ok(false),
        }
    }
}
