use crate::block::Block;
use crate::bullet::Bullet;
use crate::clock::is_active;
use crate::collision::{Aabb, Collidable};
use crate::entity::{Body, DEFAULT_SPEED, EntityMode, Facing};
use crate::health::{DamageEvent, DamageResult, Health};
use crate::input::{Action, InputSource};
use glam::Vec2;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const PLAYER_WIDTH: f32 = 75.0;
pub const PLAYER_HEIGHT: f32 = 75.0;
pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const SHOOT_COOLDOWN: Duration = Duration::from_secs(1);

/// Below this height the player bleeds out one point per frame.
pub const WORLD_FLOOR_Y: f32 = -1000.0;
pub const FALL_DAMAGE_PER_FRAME: f32 = 1.0;

/// Whether the player is still in play after this frame's update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Alive,
    Dead,
}

pub struct Player {
    pub body: Body,
    health: Health,
    ammo: u32,
    shoot_cooldown: Option<Instant>,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Player {
            body: Body::new(spawn, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)).with_speed(DEFAULT_SPEED),
            health: Health::new(PLAYER_MAX_HEALTH),
            ammo: 0,
            shoot_cooldown: None,
        }
    }

    /// Runs one frame of player logic.
    ///
    /// A dead player stays frozen where it is; the caller decides what to do
    /// with the `Dead` status.
    pub fn update(
        &mut self,
        input: &impl InputSource,
        blocks: &[Block],
        bullets: &mut Vec<Bullet>,
        now: Instant,
    ) -> PlayerStatus {
        if !self.health.is_alive() {
            self.body.mode = EntityMode::Dying;
            return PlayerStatus::Dead;
        }

        if self.body.position.y < WORLD_FLOOR_Y {
            self.take_damage(DamageEvent::fall(FALL_DAMAGE_PER_FRAME));
        }

        self.body.recompute_center();
        self.body.handle_ground(blocks);

        self.handle_shooting(input, bullets, now);
        self.handle_movement(input);
        self.body.handle_collisions(blocks);

        self.body.integrate();

        PlayerStatus::Alive
    }

    fn handle_shooting(&mut self, input: &impl InputSource, bullets: &mut Vec<Bullet>, now: Instant) {
        if !is_active(self.shoot_cooldown, now) {
            self.shoot_cooldown = None;
        }

        if self.ammo == 0 || !input.is_pressed(Action::Shoot) || self.shoot_cooldown.is_some() {
            return;
        }

        bullets.push(Bullet::new(self.muzzle(), self.body.facing, now));
        self.ammo -= 1;
        self.shoot_cooldown = Some(now + SHOOT_COOLDOWN);
        debug!(ammo_left = self.ammo, "player fired");
    }

    fn handle_movement(&mut self, input: &impl InputSource) {
        if input.is_pressed(Action::Jump) && self.body.grounded {
            self.body.jump();
        }

        if input.is_pressed(Action::MoveRight) {
            self.body.velocity.x = self.body.speed;
            self.body.facing = Facing::Right;
        } else if input.is_pressed(Action::MoveLeft) {
            self.body.velocity.x = -self.body.speed;
            self.body.facing = Facing::Left;
        } else {
            self.body.velocity.x = 0.0;
        }
    }

    /// Where new bullets appear: the middle of the hitbox, rounded down.
    fn muzzle(&self) -> Vec2 {
        self.body.position + (self.body.size / 2.0).floor()
    }

    pub fn take_damage(&mut self, event: DamageEvent) -> DamageResult {
        let result = self.health.take_damage(event.amount);
        debug!(
            dealt = result.damage_dealt,
            source = ?event.source,
            remaining = self.health.current(),
            "player took damage"
        );

        if result.is_fatal && result.damage_dealt > 0.0 {
            info!(
                source = ?event.source,
                x = self.body.position.x,
                y = self.body.position.y,
                "player died"
            );
        }
        result
    }

    pub fn collect_ammo(&mut self, count: u32) {
        self.ammo += count;
    }

    pub fn health(&self) -> f32 {
        self.health.current()
    }

    pub fn max_health(&self) -> f32 {
        self.health.max()
    }

    /// Remaining health as a fraction of max, for the HUD.
    pub fn health_percentage(&self) -> f32 {
        self.health.percentage()
    }

    pub fn ammo_count(&self) -> u32 {
        self.ammo
    }

    pub fn shoot_cooldown(&self) -> Option<Instant> {
        self.shoot_cooldown
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }
}

impl Collidable for Player {
    fn bounds(&self) -> Aabb {
        self.body.bounds()
    }
}
