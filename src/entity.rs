//! Shared kinematic state for everything that moves
//!
//! Every dynamic object in a level (player, enemies, bullets, pickups, the
//! portal) owns a [`Body`]: a plain data record holding position, velocity,
//! acceleration, hitbox size, facing and the current [`EntityMode`]. The
//! physics helpers here operate on that record; the concrete entity types
//! layer their own behaviour on top.
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **Composition over inheritance**: kinds hold a `Body` instead of extending one
//! - **Enums for state**: `EntityMode` and `Facing` replace loosely-typed flags
//! - **Slices as views**: physics reads `&[Block]` without owning the level

use crate::block::Block;
use crate::collision::{Aabb, Collidable, bottom_colliding, side_colliding};
use glam::Vec2;

/// Constant downward pull applied while airborne (units per frame²).
pub const GRAVITY: Vec2 = Vec2::new(0.0, -1.0);

/// Upward impulse added to acceleration on a jump.
pub const JUMP_IMPULSE: Vec2 = Vec2::new(0.0, 17.0);

/// Default horizontal speed in units per frame.
pub const DEFAULT_SPEED: f32 = 10.0;

/// The current animation/behaviour state of an entity.
///
/// The renderer owns the mapping from mode to artwork; entities only track
/// which mode they're in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityMode {
    #[default]
    Idle,
    Walking,
    Attacking,
    Dying,
    Jumping,
}

/// Horizontal facing. Only ±x is meaningful in a side-scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Unit direction vector for this facing.
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }

    /// Faces right for a strictly positive `dx`, left otherwise.
    pub fn toward(dx: f32) -> Self {
        if dx > 0.0 { Facing::Right } else { Facing::Left }
    }
}

/// Picks the mode implied by ground contact and horizontal motion.
///
/// | grounded | moving | mode      |
/// |----------|--------|-----------|
/// | yes      | yes    | `Walking` |
/// | yes      | no     | `Idle`    |
/// | no       | -      | `Jumping` |
pub fn determine_mode(grounded: bool, velocity_x: f32) -> EntityMode {
    match (grounded, velocity_x != 0.0) {
        (true, true) => EntityMode::Walking,
        (true, false) => EntityMode::Idle,
        (false, _) => EntityMode::Jumping,
    }
}

/// Kinematic + collidable record shared by all entity kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub size: Vec2,
    /// Cached `position + size / 2`, refreshed by [`Body::recompute_center`].
    pub center: Vec2,
    pub facing: Facing,
    pub mode: EntityMode,
    pub grounded: bool,
    pub speed: f32,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Body {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size,
            center: position + size / 2.0,
            facing: Facing::default(),
            mode: EntityMode::default(),
            grounded: false,
            speed: DEFAULT_SPEED,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn recompute_center(&mut self) {
        self.center = self.position + self.size / 2.0;
    }

    /// Sets `grounded` iff the body is falling/resting and would land on a block.
    ///
    /// Stops at the first block that supports it.
    pub fn grounded_check(&mut self, blocks: &[Block]) {
        let bounds = self.bounds();
        let falling = self.velocity.y <= 0.0;

        self.grounded = falling
            && blocks
                .iter()
                .any(|block| bottom_colliding(&bounds, &block.bounds(), self.velocity.y));
    }

    /// Zeroes velocity components that would push the body into terrain.
    ///
    /// Every block is checked; later blocks may zero a component again but
    /// never restore it.
    pub fn handle_collisions(&mut self, blocks: &[Block]) {
        let bounds = self.bounds();

        for block in blocks {
            let block_bounds = block.bounds();

            if self.velocity.y <= 0.0 && bottom_colliding(&bounds, &block_bounds, self.velocity.y) {
                self.velocity.y = 0.0;
            }

            if self.velocity.x != 0.0 && side_colliding(&bounds, &block_bounds, self.velocity.x) {
                self.velocity.x = 0.0;
            }
        }
    }

    /// Refreshes ground contact, mode and gravity for this frame.
    pub fn handle_ground(&mut self, blocks: &[Block]) {
        self.grounded_check(blocks);
        self.mode = determine_mode(self.grounded, self.velocity.x);
        self.acceleration = if self.grounded { Vec2::ZERO } else { GRAVITY };
    }

    /// Adds the jump impulse on top of whatever acceleration is already set.
    pub fn jump(&mut self) {
        self.acceleration += JUMP_IMPULSE;
    }

    /// `velocity += acceleration; position += velocity`
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
    }
}

impl Collidable for Body {
    fn bounds(&self) -> Aabb {
        Aabb::from_parts(self.position, self.size)
    }
}
