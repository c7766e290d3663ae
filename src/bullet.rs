//! Projectiles and the per-frame projectile pass
//!
//! Bullets are short-lived bodies that fly in a straight line. Each frame the
//! level runs [`resolve_bullets`], which builds a fresh list of survivors
//! instead of deleting from the list it is walking.

use crate::block::Block;
use crate::collision::{Aabb, Collidable, first_overlapping};
use crate::enemy::Enemy;
use crate::entity::{Body, EntityMode, Facing};
use glam::Vec2;
use std::time::{Duration, Instant};
use tracing::debug;

pub const BULLET_WIDTH: f32 = 10.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const BULLET_SPEED: f32 = 10.0;
pub const BULLET_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub body: Body,
    direction: Vec2,
    expires_at: Instant,
}

impl Bullet {
    /// Spawns a bullet at `origin` (its bottom-left corner) flying toward `facing`.
    pub fn new(origin: Vec2, facing: Facing, now: Instant) -> Self {
        Bullet::with_lifetime(origin, facing, now, BULLET_LIFETIME)
    }

    pub fn with_lifetime(origin: Vec2, facing: Facing, now: Instant, lifetime: Duration) -> Self {
        let mut body = Body::new(origin, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT)).with_speed(BULLET_SPEED);
        body.facing = facing;
        body.mode = EntityMode::Walking;

        Bullet {
            body,
            direction: facing.unit(),
            expires_at: now + lifetime,
        }
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }

    /// Straight-line flight: no gravity, no terrain response.
    pub fn update(&mut self) {
        self.body.velocity = self.direction * self.body.speed;
        self.body.position += self.body.velocity;
        self.body.recompute_center();
    }
}

impl Collidable for Bullet {
    fn bounds(&self) -> Aabb {
        self.body.bounds()
    }
}

/// What happened to the bullet list during one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulletReport {
    pub expired: usize,
    pub enemies_killed: usize,
    pub blocked: usize,
}

/// Runs one frame of projectile bookkeeping and returns the survivors.
///
/// Order per bullet:
/// 1. Drop it if its lifetime has passed.
/// 2. If it touches an enemy, remove the first such enemy and drop the bullet.
/// 3. Otherwise, if it touches any block, drop the bullet.
/// 4. Otherwise keep it.
///
/// Survivors are then advanced one step.
pub fn resolve_bullets(
    bullets: Vec<Bullet>,
    enemies: &mut Vec<Enemy>,
    blocks: &[Block],
    now: Instant,
) -> (Vec<Bullet>, BulletReport) {
    let mut report = BulletReport::default();
    let mut survivors = Vec::with_capacity(bullets.len());

    for bullet in bullets {
        if bullet.is_expired(now) {
            report.expired += 1;
            continue;
        }

        if let Some(index) = first_overlapping(&bullet, enemies.as_slice()) {
            let enemy = enemies.remove(index);
            debug!(
                x = enemy.body.position.x,
                y = enemy.body.position.y,
                health = enemy.health(),
                "enemy shot down"
            );
            report.enemies_killed += 1;
            continue;
        }

        if first_overlapping(&bullet, blocks).is_some() {
            report.blocked += 1;
            continue;
        }

        survivors.push(bullet);
    }

    for bullet in survivors.iter_mut() {
        bullet.update();
    }

    (survivors, report)
}
