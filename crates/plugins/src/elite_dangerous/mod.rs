//! Elite Dangerous plugin: reads `Custom.*.binds` exports.

pub mod parser;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use joystick_diagrams_core::prelude::*;

use crate::common::resolve_existing_path;
use parser::BindsFile;

pub const PLUGIN_ID: &str = "elite_dangerous";

pub struct EliteDangerous {
    settings: Arc<Settings>,
    logger: Arc<dyn CoreLog>,
    file: Option<BindsFile>,
}

impl EliteDangerous {
    pub fn new(settings: Arc<Settings>, logger: Arc<dyn CoreLog>) -> Self {
        Self {
            settings,
            logger,
            file: None,
        }
    }

    /// Resolve `path` (falling back to the game's bindings dir) and validate it.
    pub fn load(&self, path: &Path) -> Result<BindsFile, PluginError> {
        let bindings_dir = self.settings.elite_dangerous_bindings_dir();
        let resolved = resolve_existing_path(path, bindings_dir.as_deref())
            .ok_or_else(|| PluginError::NotFound(path.to_path_buf()))?;
        BindsFile::load(&resolved)
    }
}

impl Plugin for EliteDangerous {
    fn id(&self) -> &'static str {
        PLUGIN_ID
    }

    fn name(&self) -> &'static str {
        "Elite Dangerous"
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn set_path(&mut self, path: &Path) -> bool {
        match self.load(path) {
            Ok(file) => {
                self.logger
                    .info(&format!("[set_path] loaded {}", file.path.display()));
                self.file = Some(file);
                if let Err(e) = self.save_plugin_state() {
                    self.logger
                        .warn(&format!("[set_path] could not save plugin state: {e}"));
                }
                true
            }
            Err(e) => {
                self.logger
                    .error(&format!("[set_path] {}: {e}", path.display()));
                false
            }
        }
    }

    fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(|f| f.path.as_path())
    }

    fn process(&self) -> Result<ProfileCollection, PluginError> {
        let file = self.file.as_ref().ok_or(PluginError::NoPathSet)?;
        parser::parse(&file.content, self.logger.as_ref())
    }

    fn path_type(&self) -> FilePath {
        let default_path = self
            .path()
            .map(Path::to_path_buf)
            .or_else(|| self.settings.elite_dangerous_bindings_dir())
            .unwrap_or_else(home_dir);
        FilePath::new(
            "Select your Elite Dangerous Custom.4.0.binds",
            default_path,
            &[".binds"],
        )
    }
}

fn home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_default()
}
