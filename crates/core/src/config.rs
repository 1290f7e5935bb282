//! Process-wide settings, loaded once from `settings.json` and passed by
//! reference to whatever needs them.

use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::error::ConfigError;

pub const APP_DIR_NAME: &str = "joystick-diagrams";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Root for persisted plugin state. Defaults to `<user data dir>/joystick-diagrams`.
    pub data_dir: Option<PathBuf>,
    /// Root holding one asset dir per plugin. Defaults to the executable's dir.
    pub assets_dir: Option<PathBuf>,
    /// Icon file name inside a plugin's asset dir.
    pub plugin_icon: String,
    /// Where relative Elite Dangerous `.binds` paths are looked up.
    pub elite_dangerous_bindings_dir: Option<PathBuf>,
    /// Device prefixes the Star Citizen plugin treats as joysticks.
    pub star_citizen_device_prefixes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_dir: None,
            assets_dir: None,
            plugin_icon: "img/logo.ico".to_string(),
            elite_dangerous_bindings_dir: None,
            star_citizen_device_prefixes: vec!["js".to_string()],
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let read_err = |source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        };
        if !path.try_exists().map_err(read_err)? {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path).map_err(read_err)?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `data_dir` if configured, else the platform data dir for this app.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = directories::BaseDirs::new().ok_or(ConfigError::NoDataDir)?;
        Ok(base.data_dir().join(APP_DIR_NAME))
    }

    /// Directory holding `plugin_id`'s persisted state (not created).
    pub fn plugin_data_dir(&self, plugin_id: &str) -> Result<PathBuf, ConfigError> {
        Ok(self.resolve_data_dir()?.join("plugins").join(plugin_id))
    }

    /// Asset dir for `plugin_id`: `<assets_dir>/plugins/<plugin_id>`.
    pub fn plugin_assets_dir(&self, plugin_id: &str) -> PathBuf {
        let root = self.assets_dir.clone().unwrap_or_else(|| {
            env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_default()
        });
        root.join("plugins").join(plugin_id)
    }

    /// Configured ED bindings dir, else the game's default under local app data.
    pub fn elite_dangerous_bindings_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.elite_dangerous_bindings_dir {
            return Some(dir.clone());
        }
        directories::BaseDirs::new().map(|b| {
            b.data_local_dir()
                .join("Frontier Developments")
                .join("Elite Dangerous")
                .join("Options")
                .join("Bindings")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{ "plugin_icon": "img/ed.ico" }"#).unwrap();

        let s = Settings::load(&path).unwrap();
        assert_eq!(s.plugin_icon, "img/ed.ico");
        assert_eq!(s.star_citizen_device_prefixes, vec!["js".to_string()]);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_location_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain");
        fs::write(&not_a_dir, "").unwrap();

        assert!(matches!(
            Settings::load(not_a_dir.join(SETTINGS_FILE)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn plugin_dirs_hang_off_configured_roots() {
        let s = Settings {
            data_dir: Some(PathBuf::from("/data")),
            assets_dir: Some(PathBuf::from("/assets")),
            ..Default::default()
        };
        assert_eq!(
            s.plugin_data_dir("elite_dangerous").unwrap(),
            PathBuf::from("/data/plugins/elite_dangerous")
        );
        assert_eq!(
            s.plugin_assets_dir("star_citizen"),
            PathBuf::from("/assets/plugins/star_citizen")
        );
    }
}
