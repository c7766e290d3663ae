//! Game configuration
//!
//! Every field has a default, so a config file only needs the keys it wants to
//! change:
//!
//! ```json
//! { "levels": ["level_1.json", "level_2.json", "bonus.json"], "show_hitboxes": true }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "blue-squirrel";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Where level files live, relative to the working directory unless absolute.
    pub levels_dir: PathBuf,
    /// Play order.
    pub levels: Vec<String>,
    /// Fraction of the viewport height between the bottom edge and the player.
    pub camera_y_fraction: f32,
    pub show_hitboxes: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 1280,
            window_height: 720,
            levels_dir: PathBuf::from("levels"),
            levels: vec!["level_1.json".to_string(), "level_2.json".to_string()],
            camera_y_fraction: 0.25,
            show_hitboxes: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<config dir>/blue-squirrel/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolves the config to use at startup.
    ///
    /// An explicit path must load. Otherwise the per-user file is used when it
    /// exists and parses, and the built-in defaults when it doesn't.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            info!(path = %path.display(), "loaded config");
            return Ok(config);
        }

        Ok(Self::default_path()
            .map(|path| Self::load_user_file(&path))
            .unwrap_or_default())
    }

    fn load_user_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(error = %e, "ignoring config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!((config.window_width, config.window_height), (1280, 720));
        assert_eq!(config.levels, vec!["level_1.json", "level_2.json"]);
        assert_eq!(config.camera_y_fraction, 0.25);
        assert!(!config.show_hitboxes);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"show_hitboxes": true, "levels": ["only.json"]}"#).unwrap();

        let config = GameConfig::load_from_file(&path).unwrap();

        assert!(config.show_hitboxes);
        assert_eq!(config.levels, vec!["only.json"]);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.levels_dir, PathBuf::from("levels"));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let result = GameConfig::load_or_default(Some(&missing));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_explicit_path_must_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            GameConfig::load_or_default(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_broken_user_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "[]").unwrap();

        assert_eq!(GameConfig::load_user_file(&path), GameConfig::default());
    }
}
