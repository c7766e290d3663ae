//! Oh No My Blue Flying Squirrel
//!
//! A small side-scrolling platformer. This library is the whole simulation:
//! box collision, entity physics, the player and enemy controllers,
//! projectiles, pickups, level loading and the menu/play/game-over flow.
//! It has no windowing dependency; the SDL2 front end lives in the binary
//! (`--features sdl`).
//!
//! World coordinates have y pointing up, and every box is anchored at its
//! bottom-left corner. One frame of play is one call to
//! [`game::GameSession::update`].

pub mod block;
pub mod bullet;
pub mod camera;
pub mod clock;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod error;
pub mod font;
pub mod game;
pub mod health;
pub mod input;
pub mod level;
pub mod pickup;
pub mod player;
pub mod render;

pub use error::{ConfigError, GameError, LevelError};
