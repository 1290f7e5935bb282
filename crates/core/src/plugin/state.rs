use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::error::PluginError;

pub const STATE_FILE: &str = "data.json";

/// What a plugin remembers between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PluginState {
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Local>>,
}

impl PluginState {
    pub fn for_path(path: &Path) -> Self {
        PluginState {
            path: Some(path.to_path_buf()),
            saved_at: Some(Local::now()),
        }
    }

    /// Write `<dir>/data.json`, creating `dir` if needed.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, PluginError> {
        fs::create_dir_all(dir)?;
        let file = dir.join(STATE_FILE);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PluginError::State(format!("serialize plugin state: {e}")))?;
        fs::write(&file, json)?;
        Ok(file)
    }

    /// Read `<dir>/data.json`. `Ok(None)` when nothing has been saved yet.
    pub fn load(dir: &Path) -> Result<Option<Self>, PluginError> {
        let file = dir.join(STATE_FILE);
        if !file.try_exists().unwrap_or(false) {
            return Ok(None);
        }
        let content = fs::read_to_string(&file)?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| PluginError::State(format!("parse {}: {e}", file.display())))
    }
}
