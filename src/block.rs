//! Static level geometry
//!
//! Blocks are the immovable terrain tiles a level is built from. They are
//! created once at level load and never move for the lifetime of the level.

use crate::collision::{Aabb, Collidable};
use serde::{Deserialize, Serialize};

/// Edge length of one terrain tile in world units.
pub const BLOCK_SIZE: f32 = 30.0;

/// A display colour handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// A single immovable, collidable tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    bounds: Aabb,
    pub color: Rgb,
}

impl Block {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Rgb) -> Self {
        Block {
            bounds: Aabb::new(x, y, width, height),
            color,
        }
    }

    /// Creates a standard white tile at a grid coordinate from level data.
    pub fn tile(x: i32, y: i32) -> Self {
        Block::new(x as f32, y as f32, BLOCK_SIZE, BLOCK_SIZE, Rgb::WHITE)
    }
}

impl Collidable for Block {
    fn bounds(&self) -> Aabb {
        self.bounds
    }
}
