//! Star Citizen plugin: reads a user `actionmaps.xml`.

pub mod parser;

use std::{path::Path, sync::Arc};

use joystick_diagrams_core::prelude::*;

use parser::ActionMapsFile;

pub const PLUGIN_ID: &str = "star_citizen";

pub struct StarCitizen {
    settings: Arc<Settings>,
    logger: Arc<dyn CoreLog>,
    file: Option<ActionMapsFile>,
}

impl StarCitizen {
    pub fn new(settings: Arc<Settings>, logger: Arc<dyn CoreLog>) -> Self {
        Self {
            settings,
            logger,
            file: None,
        }
    }
}

impl Plugin for StarCitizen {
    fn id(&self) -> &'static str {
        PLUGIN_ID
    }

    fn name(&self) -> &'static str {
        "Star Citizen"
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn set_path(&mut self, path: &Path) -> bool {
        match ActionMapsFile::load(path) {
            Ok(file) => {
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
        parser::parse(
            &file.content,
            &self.settings.star_citizen_device_prefixes,
            self.logger.as_ref(),
        )
    }

    fn path_type(&self) -> FilePath {
        let default_path = self
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| {
                directories::BaseDirs::new()
                    .map(|b| b.home_dir().to_path_buf())
                    .unwrap_or_default()
            });
        FilePath::new(
            "Select your Star Citizen actionmaps.xml",
            default_path,
            &parser::EXTENSIONS,
        )
    }
}
