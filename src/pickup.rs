//! Touch-triggered level objects: ammo pickups and the exit portal
//!
//! Neither object moves or thinks. They only matter when the player's box
//! overlaps theirs.

use crate::collision::{Aabb, Collidable};
use crate::entity::Body;
use crate::player::Player;
use glam::Vec2;

pub const AMMO_SIZE: f32 = 30.0;
pub const PORTAL_WIDTH: f32 = 70.0;
pub const PORTAL_HEIGHT: f32 = 120.0;

/// A single round of ammunition lying in the level.
#[derive(Debug, Clone, PartialEq)]
pub struct Ammo {
    pub body: Body,
}

impl Ammo {
    pub fn new(position: Vec2) -> Self {
        Ammo {
            body: Body::new(position, Vec2::new(AMMO_SIZE, AMMO_SIZE)),
        }
    }
}

impl Collidable for Ammo {
    fn bounds(&self) -> Aabb {
        self.body.bounds()
    }
}

/// The level exit.
#[derive(Debug, Clone, PartialEq)]
pub struct Portal {
    pub body: Body,
}

impl Portal {
    pub fn new(position: Vec2) -> Self {
        Portal {
            body: Body::new(position, Vec2::new(PORTAL_WIDTH, PORTAL_HEIGHT)),
        }
    }

    /// True when the player is touching the portal this frame.
    pub fn update(&self, player: &Player) -> bool {
        self.is_colliding(player)
    }
}

impl Collidable for Portal {
    fn bounds(&self) -> Aabb {
        self.body.bounds()
    }
}

/// Splits `ammo` into what the player touched and what stays in the level.
///
/// Returns the remaining pickups and how many were collected.
pub fn collect_ammo(ammo: Vec<Ammo>, player: &Player) -> (Vec<Ammo>, u32) {
    let (taken, remaining): (Vec<Ammo>, Vec<Ammo>) =
        ammo.into_iter().partition(|pickup| pickup.is_colliding(player));

    (remaining, taken.len() as u32)
}
