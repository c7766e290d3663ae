//! Error types for level loading, configuration and game flow.

use crate::game::GameMode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading level data.
#[derive(Debug, Error)]
pub enum LevelError {
    /// No level with this name exists in the source.
    #[error("Level not found: {0}")]
    NotFound(String),

    /// The level file exists but could not be read.
    #[error("Failed to read level '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The level file is not valid level JSON.
    #[error("Malformed level '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The level parsed, but has nowhere to put the player.
    #[error("Level '{0}' has no player spawn")]
    MissingPlayerSpawn(String),
}

/// Errors that can occur when loading the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by the game session state machine.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error("No levels configured")]
    NoLevels,

    #[error("Cannot {action} while in {from:?}")]
    InvalidTransition { from: GameMode, action: &'static str },
}
