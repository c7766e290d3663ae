//! Level file schema and level sources
//!
//! Levels are stored one per JSON file:
//!
//! ```json
//! {
//!   "player_spawn": [0, 30],
//!   "blocks":  [[0, 0], [30, 0]],
//!   "enemies": [[300, 30]],
//!   "ammo":    [[120, 30]],
//!   "level_end": [600, 30]
//! }
//! ```
//!
//! `player_spawn` and `blocks` must be present (`player_spawn` may be `null`
//! in files saved mid-edit); the other keys are optional. All coordinates are
//! integer world units.
//!
//! # Architecture
//!
//! - `LevelData`: the pure-data schema (serde)
//! - `LevelSource` trait: where level data comes from
//! - `LevelLibrary`: a directory of `.json` files
//! - `MemoryLevels`: levels held in memory (tests, generated content)

use crate::error::LevelError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One level as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelData {
    /// Required key, nullable value.
    #[serde(deserialize_with = "Option::deserialize")]
    pub player_spawn: Option<(i32, i32)>,
    pub blocks: Vec<(i32, i32)>,
    #[serde(default)]
    pub enemies: Vec<(i32, i32)>,
    #[serde(default)]
    pub ammo: Vec<(i32, i32)>,
    #[serde(default)]
    pub level_end: Option<(i32, i32)>,
}

impl LevelData {
    /// Parses level JSON. `name` is only used for error messages.
    pub fn from_json(name: &str, json: &str) -> Result<Self, LevelError> {
        serde_json::from_str(json).map_err(|source| LevelError::Parse {
            name: name.to_string(),
            source,
        })
    }

    /// Pretty JSON in the same schema, for tools that write levels.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Anything that can hand out level data by name.
pub trait LevelSource {
    fn load(&self, name: &str) -> Result<LevelData, LevelError>;
}

/// A directory of level files.
pub struct LevelLibrary {
    directory: PathBuf,
}

impl LevelLibrary {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        LevelLibrary {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }

    /// Lists every `.json` file in the directory, sorted by name.
    pub fn list_levels(&self) -> Result<Vec<String>, LevelError> {
        let read_error = |source| LevelError::Read {
            path: self.directory.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.directory).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();

            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(filename) = path.file_name().and_then(|f| f.to_str()) {
                    names.push(filename.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

impl LevelSource for LevelLibrary {
    fn load(&self, name: &str) -> Result<LevelData, LevelError> {
        let path = self.path_for(name);

        if !path.exists() {
            return Err(LevelError::NotFound(name.to_string()));
        }

        let json = fs::read_to_string(&path).map_err(|source| LevelError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = json.len(), "read level file");

        LevelData::from_json(name, &json)
    }
}

/// Levels kept in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevels {
    levels: HashMap<String, LevelData>,
}

impl MemoryLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, data: LevelData) -> Self {
        self.insert(name, data);
        self
    }

    pub fn insert(&mut self, name: &str, data: LevelData) {
        self.levels.insert(name.to_string(), data);
    }
}

impl LevelSource for MemoryLevels {
    fn load(&self, name: &str) -> Result<LevelData, LevelError> {
        self.levels
            .get(name)
            .cloned()
            .ok_or_else(|| LevelError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_LEVEL: &str = r#"{
        "player_spawn": [0, 30],
        "blocks": [[0, 0], [30, 0]],
        "enemies": [[300, 30]],
        "ammo": [[120, 30], [150, 30]],
        "level_end": [600, 30]
    }"#;

    #[test]
    fn test_parse_full_level() {
        let level = LevelData::from_json("full", FULL_LEVEL).unwrap();

        assert_eq!(level.player_spawn, Some((0, 30)));
        assert_eq!(level.blocks, vec![(0, 0), (30, 0)]);
        assert_eq!(level.enemies, vec![(300, 30)]);
        assert_eq!(level.ammo.len(), 2);
        assert_eq!(level.level_end, Some((600, 30)));
    }

    #[test]
    fn test_optional_keys_default_to_empty() {
        let level = LevelData::from_json("minimal", r#"{"player_spawn": null, "blocks": []}"#).unwrap();

        assert_eq!(level, LevelData::default());
    }

    #[test]
    fn test_missing_required_keys_fail() {
        let missing_blocks = LevelData::from_json("a", r#"{"player_spawn": [0, 0]}"#);
        assert!(matches!(missing_blocks, Err(LevelError::Parse { .. })));

        let missing_spawn = LevelData::from_json("b", r#"{"blocks": []}"#);
        assert!(matches!(missing_spawn, Err(LevelError::Parse { .. })));
    }

    #[test]
    fn test_non_numeric_coordinates_fail() {
        let result = LevelData::from_json("bad", r#"{"player_spawn": ["a", 0], "blocks": []}"#);
        assert!(matches!(result, Err(LevelError::Parse { ref name, .. }) if name == "bad"));

        let result = LevelData::from_json("bad", r#"{"player_spawn": [0, 0], "blocks": [[1.5, 0]]}"#);
        assert!(matches!(result, Err(LevelError::Parse { .. })));
    }

    #[test]
    fn test_json_output_uses_same_schema() {
        let level = LevelData::from_json("full", FULL_LEVEL).unwrap();
        let json = level.to_json_pretty().unwrap();

        assert!(json.contains("\"player_spawn\""));
        assert!(json.contains("\"level_end\""));
        assert_eq!(LevelData::from_json("again", &json).unwrap(), level);
    }

    #[test]
    fn test_library_loads_and_lists() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("level_2.json"), FULL_LEVEL).unwrap();
        fs::write(dir.path().join("level_1.json"), FULL_LEVEL).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a level").unwrap();

        let library = LevelLibrary::new(dir.path());

        assert_eq!(library.list_levels().unwrap(), vec!["level_1.json", "level_2.json"]);
        assert_eq!(library.load("level_1.json").unwrap().enemies, vec![(300, 30)]);
    }

    #[test]
    fn test_library_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let library = LevelLibrary::new(dir.path());

        assert!(matches!(library.load("nope.json"), Err(LevelError::NotFound(_))));
    }

    #[test]
    fn test_bundled_levels_parse() {
        for (name, json) in [
            ("level_1.json", include_str!("../../levels/level_1.json")),
            ("level_2.json", include_str!("../../levels/level_2.json")),
        ] {
            let level = LevelData::from_json(name, json).unwrap();
            assert!(level.player_spawn.is_some(), "{name} has no spawn");
            assert!(level.level_end.is_some(), "{name} has no exit");
        }
    }

    #[test]
    fn test_memory_levels() {
        let levels = MemoryLevels::new().with("one", LevelData::default());

        assert!(levels.load("one").is_ok());
        assert!(matches!(levels.load("two"), Err(LevelError::NotFound(_))));
    }
}
