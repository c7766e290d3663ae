//! Game session state machine
//!
//! ```text
//! MainMenu --play--> InGame --portal, more levels--> InGame
//!                      |--portal, last level----> Win
//!                      `--player dies-----------> GameOver
//! ```
//!
//! `GameOver` and `Win` are terminal. Every level is loaded fresh when it
//! starts; nothing carries over from the previous one.

use crate::clock::Clock;
use crate::error::GameError;
use crate::input::InputSource;
use crate::level::{LevelOutcome, LevelSession, LevelSource};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    MainMenu,
    InGame,
    GameOver,
    Win,
}

pub struct GameSession {
    mode: GameMode,
    levels: Vec<String>,
    current_level: usize,
    level: Option<LevelSession>,
    source: Box<dyn LevelSource>,
    clock: Box<dyn Clock>,
}

impl GameSession {
    /// Creates a session sitting at the main menu.
    ///
    /// `levels` is the play order; names are handed to `source` as-is.
    pub fn new(levels: Vec<String>, source: impl LevelSource + 'static, clock: impl Clock + 'static) -> Self {
        GameSession {
            mode: GameMode::MainMenu,
            levels,
            current_level: 0,
            level: None,
            source: Box::new(source),
            clock: Box::new(clock),
        }
    }

    /// Menu "Play": loads the first level and enters `InGame`.
    pub fn play(&mut self) -> Result<(), GameError> {
        if self.mode != GameMode::MainMenu {
            return Err(GameError::InvalidTransition {
                from: self.mode,
                action: "play",
            });
        }
        if self.levels.is_empty() {
            return Err(GameError::NoLevels);
        }

        let level = self.load_level(0)?;
        self.current_level = 0;
        self.level = Some(level);
        self.mode = GameMode::InGame;
        Ok(())
    }

    /// Moves on to the next level, or to `Win` after the last one.
    ///
    /// The next level is fully loaded before the current one is dropped, so a
    /// load error leaves the session exactly as it was.
    pub fn advance_level(&mut self) -> Result<GameMode, GameError> {
        if self.mode != GameMode::InGame {
            return Err(GameError::InvalidTransition {
                from: self.mode,
                action: "advance level",
            });
        }

        let next = self.current_level + 1;
        if next >= self.levels.len() {
            info!(levels = self.levels.len(), "all levels cleared");
            self.level = None;
            self.mode = GameMode::Win;
            return Ok(self.mode);
        }

        let level = self.load_level(next)?;
        info!(from = self.current_level, to = next, "advancing level");
        self.current_level = next;
        self.level = Some(level);
        Ok(self.mode)
    }

    /// Runs one frame. Does nothing outside `InGame`.
    pub fn update(&mut self, input: &impl InputSource) -> Result<GameMode, GameError> {
        let now = self.clock.now();
        let Some(level) = self.level.as_mut() else {
            return Ok(self.mode);
        };

        match level.update(input, now) {
            LevelOutcome::Continue => Ok(self.mode),
            LevelOutcome::PlayerDied => {
                info!(level = self.current_level, "game over");
                self.level = None;
                self.mode = GameMode::GameOver;
                Ok(self.mode)
            }
            LevelOutcome::Completed => self.advance_level(),
        }
    }

    fn load_level(&self, index: usize) -> Result<LevelSession, GameError> {
        let name = &self.levels[index];
        let data = self.source.load(name)?;
        Ok(LevelSession::load_from(name, &data)?)
    }

    pub fn current_mode(&self) -> GameMode {
        self.mode
    }

    /// The running level, if any.
    pub fn level(&self) -> Option<&LevelSession> {
        self.level.as_ref()
    }

    pub fn current_level_index(&self) -> usize {
        self.current_level
    }
}
