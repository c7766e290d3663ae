use crate::block::Block;
use crate::clock::is_active;
use crate::collision::{Aabb, Collidable};
use crate::entity::{Body, EntityMode, Facing};
use crate::health::{DamageEvent, Health};
use crate::player::Player;
use glam::Vec2;
use std::time::{Duration, Instant};
use tracing::debug;

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 70.0;
pub const ENEMY_MAX_HEALTH: f32 = 25.0;
pub const ENEMY_SPEED: f32 = 3.0;

/// Enemies further than this from the player are frozen for the frame.
pub const ACTIVE_RANGE: f32 = 1000.0;
/// Inside this distance (exclusive) the enemy chases the player.
pub const CHASE_RANGE: f32 = 500.0;
/// At or inside this distance the enemy stops and attacks.
pub const ATTACK_RANGE: f32 = 50.0;

pub const ATTACK_DAMAGE: f32 = 50.0;
pub const ATTACK_COOLDOWN: Duration = Duration::from_millis(1800);

/// What the AI decided to do this frame, from the distance to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyBehavior {
    #[default]
    Idle,
    Chasing,
    Attacking,
}

impl EnemyBehavior {
    pub fn from_distance(distance: f32) -> Self {
        if distance <= ATTACK_RANGE {
            EnemyBehavior::Attacking
        } else if distance < CHASE_RANGE {
            EnemyBehavior::Chasing
        } else {
            EnemyBehavior::Idle
        }
    }
}

pub struct Enemy {
    pub body: Body,
    // Only reported; a single bullet removes an enemy regardless of health.
    health: Health,
    behavior: EnemyBehavior,
    attack_cooldown: Option<Instant>,
    started_attack: bool,
    target: Option<Vec2>,
}

impl Enemy {
    pub fn new(spawn: Vec2) -> Self {
        Enemy {
            body: Body::new(spawn, Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT)).with_speed(ENEMY_SPEED),
            health: Health::new(ENEMY_MAX_HEALTH),
            behavior: EnemyBehavior::Idle,
            attack_cooldown: None,
            started_attack: false,
            target: None,
        }
    }

    /// Runs one frame of AI for this enemy against `player`.
    ///
    /// Range checks measure centre to centre. Steering and facing aim from the
    /// enemy's anchor corner at the player's centre.
    ///
    /// Damage is gated only by mode and cooldown: once the enemy is in
    /// `Attacking` mode, the hit lands when the cooldown allows it.
    pub fn update(&mut self, player: &mut Player, blocks: &[Block], now: Instant) {
        self.body.recompute_center();
        let distance = player.body.center.distance(self.body.center);
        let to_player = player.body.center - self.body.position;

        if distance > ACTIVE_RANGE {
            return;
        }

        self.body.handle_ground(blocks);

        self.target_player(to_player, distance);
        self.move_toward_target();

        self.body.handle_collisions(blocks);

        self.handle_jump();

        self.body.facing = Facing::toward(to_player.x);

        if !is_active(self.attack_cooldown, now) {
            self.attack_cooldown = None;
        }

        if self.body.mode == EntityMode::Attacking && self.attack_cooldown.is_none() {
            player.take_damage(DamageEvent::enemy_attack(ATTACK_DAMAGE));
            self.attack_cooldown = Some(now + ATTACK_COOLDOWN);
        }

        self.body.integrate();
    }

    fn target_player(&mut self, to_player: Vec2, distance: f32) {
        self.behavior = EnemyBehavior::from_distance(distance);

        match self.behavior {
            EnemyBehavior::Chasing => {
                self.target = Some(to_player);
            }
            EnemyBehavior::Attacking => {
                self.target = None;
                if !self.started_attack {
                    debug!(distance, "enemy started attack");
                    self.started_attack = true;
                }
                self.body.velocity.x = 0.0;
                self.body.mode = EntityMode::Attacking;
            }
            EnemyBehavior::Idle => {
                self.target = None;
                self.started_attack = false;
            }
        }
    }

    fn move_toward_target(&mut self) {
        self.body.velocity.x = match self.target {
            Some(target) if target.x > 0.0 => self.body.speed,
            Some(target) if target.x < 0.0 => -self.body.speed,
            _ => 0.0,
        };
    }

    /// Hop when chasing but stopped, to clear short obstacles.
    fn handle_jump(&mut self) {
        if self.target.is_some() && self.body.velocity.x == 0.0 && self.body.grounded {
            self.body.jump();
        }
    }

    pub fn health(&self) -> f32 {
        self.health.current()
    }

    pub fn behavior(&self) -> EnemyBehavior {
        self.behavior
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn attack_cooldown(&self) -> Option<Instant> {
        self.attack_cooldown
    }

    pub fn has_started_attack(&self) -> bool {
        self.started_attack
    }
}

impl Collidable for Enemy {
    fn bounds(&self) -> Aabb {
        self.body.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::entity::JUMP_IMPULSE;
    use crate::player::PLAYER_MAX_HEALTH;

    fn floor() -> Vec<Block> {
        (-20..40).map(|i| Block::tile(i * 30, 0)).collect()
    }

    /// An enemy and a player both resting on `floor()`, centers `dx` apart horizontally.
    fn pair(dx: f32) -> (Enemy, Player) {
        let player = Player::new(Vec2::new(300.0, 29.0));
        let player_center_x = 300.0 + 37.5;
        let enemy_x = player_center_x - dx - ENEMY_WIDTH / 2.0;
        let enemy = Enemy::new(Vec2::new(enemy_x, 29.0));
        (enemy, player)
    }

    #[test]
    fn test_behavior_bands() {
        assert_eq!(EnemyBehavior::from_distance(0.0), EnemyBehavior::Attacking);
        assert_eq!(EnemyBehavior::from_distance(50.0), EnemyBehavior::Attacking);
        assert_eq!(EnemyBehavior::from_distance(50.1), EnemyBehavior::Chasing);
        assert_eq!(EnemyBehavior::from_distance(499.9), EnemyBehavior::Chasing);
        assert_eq!(EnemyBehavior::from_distance(500.0), EnemyBehavior::Idle);
    }

    #[test]
    fn test_far_enemy_is_frozen() {
        let clock = ManualClock::new();
        let mut player = Player::new(Vec2::new(0.0, 29.0));
        let mut enemy = Enemy::new(Vec2::new(5000.0, 5000.0));

        enemy.update(&mut player, &floor(), clock.now());

        assert_eq!(enemy.body.position, Vec2::new(5000.0, 5000.0));
        assert_eq!(enemy.body.acceleration, Vec2::ZERO);
        assert_eq!(enemy.behavior(), EnemyBehavior::Idle);
    }

    #[test]
    fn test_chase_moves_toward_player() {
        let clock = ManualClock::new();
        let (mut enemy, mut player) = pair(200.0);
        let start_x = enemy.body.position.x;

        enemy.update(&mut player, &floor(), clock.now());

        assert_eq!(enemy.behavior(), EnemyBehavior::Chasing);
        assert!(enemy.target().is_some());
        assert_eq!(enemy.body.position.x, start_x + ENEMY_SPEED);
        assert_eq!(enemy.body.facing, Facing::Right);
    }

    #[test]
    fn test_chase_to_the_left() {
        let clock = ManualClock::new();
        let (mut enemy, mut player) = pair(-200.0);
        let start_x = enemy.body.position.x;

        enemy.update(&mut player, &floor(), clock.now());

        assert_eq!(enemy.body.position.x, start_x - ENEMY_SPEED);
        assert_eq!(enemy.body.facing, Facing::Left);
    }

    #[test]
    fn test_steering_aims_from_anchor_corner() {
        let clock = ManualClock::new();
        // Player centre sits left of the enemy centre but right of its corner
        let mut player = Player::new(Vec2::new(10.0 - 37.5, 300.0));
        let mut enemy = Enemy::new(Vec2::new(0.0, 29.0));

        enemy.update(&mut player, &floor(), clock.now());

        assert_eq!(enemy.behavior(), EnemyBehavior::Chasing);
        assert_eq!(enemy.target().map(|t| t.x), Some(10.0));
        assert_eq!(enemy.body.velocity.x, ENEMY_SPEED);
        assert_eq!(enemy.body.facing, Facing::Right);
        assert_eq!(enemy.body.position.x, ENEMY_SPEED);
    }

    #[test]
    fn test_spawns_with_full_health() {
        assert_eq!(Enemy::new(Vec2::ZERO).health(), ENEMY_MAX_HEALTH);
    }

    #[test]
    fn test_idle_outside_chase_range() {
        let clock = ManualClock::new();
        let (mut enemy, mut player) = pair(700.0);
        let start_x = enemy.body.position.x;

        enemy.update(&mut player, &floor(), clock.now());

        assert_eq!(enemy.behavior(), EnemyBehavior::Idle);
        assert!(enemy.target().is_none());
        assert_eq!(enemy.body.position.x, start_x);
    }

    #[test]
    fn test_blocked_chaser_jumps() {
        let clock = ManualClock::new();
        let (mut enemy, mut player) = pair(200.0);
        // Wall right in front of the enemy, at body height
        let mut blocks = floor();
        blocks.push(Block::tile((enemy.body.position.x + ENEMY_WIDTH) as i32, 60));

        enemy.update(&mut player, &blocks, clock.now());

        assert_eq!(enemy.body.velocity.x, 0.0);
        assert_eq!(enemy.body.velocity.y, JUMP_IMPULSE.y);
    }

    #[test]
    fn test_attack_stops_and_hits_once() {
        let clock = ManualClock::new();
        let (mut enemy, mut player) = pair(30.0);

        enemy.update(&mut player, &floor(), clock.now());

        assert_eq!(enemy.behavior(), EnemyBehavior::Attacking);
        assert_eq!(enemy.body.mode, EntityMode::Attacking);
        assert_eq!(enemy.body.velocity.x, 0.0);
        assert!(enemy.has_started_attack());
        assert_eq!(player.health(), PLAYER_MAX_HEALTH - ATTACK_DAMAGE);
        assert_eq!(enemy.attack_cooldown(), Some(clock.now() + ATTACK_COOLDOWN));
    }

    #[test]
    fn test_attack_damage_cadence() {
        let clock = ManualClock::new();
        let (mut enemy, mut player) = pair(30.0);
        let blocks = floor();
        let mut hits = 0;
        let mut last_health = player.health();

        // 1.8s window sampled at 60fps: exactly one hit
        for _ in 0..108 {
            enemy.update(&mut player, &blocks, clock.now());
            if player.health() < last_health {
                hits += 1;
                last_health = player.health();
            }
            clock.advance(Duration::from_millis(16));
        }
        assert_eq!(hits, 1);

        // Past the window the next hit lands
        clock.advance(Duration::from_millis(100));
        enemy.update(&mut player, &blocks, clock.now());
        assert_eq!(player.health(), 0.0);
    }

    #[test]
    fn test_leaving_range_resets_attack_flag() {
        let clock = ManualClock::new();
        let (mut enemy, mut player) = pair(30.0);
        let blocks = floor();

        enemy.update(&mut player, &blocks, clock.now());
        assert!(enemy.has_started_attack());

        player.body.position.x += 800.0;
        player.body.recompute_center();
        enemy.update(&mut player, &blocks, clock.now());

        assert!(!enemy.has_started_attack());
        assert_eq!(enemy.behavior(), EnemyBehavior::Idle);
    }
}
