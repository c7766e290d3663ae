// Game module - Top-level flow across levels
//
// This module contains:
// - session.rs: GameSession state machine (menu, play, game over, win)
// - config.rs: GameConfig loaded from JSON

pub mod config;
pub mod session;

// Re-export types for convenience
pub use config::GameConfig;
pub use session::{GameMode, GameSession};
