use crate::block::Block;
use crate::bullet::{Bullet, resolve_bullets};
use crate::enemy::Enemy;
use crate::error::LevelError;
use crate::input::InputSource;
use crate::level::data::LevelData;
use crate::pickup::{Ammo, Portal, collect_ammo};
use crate::player::{Player, PlayerStatus};
use crate::render::{Renderable, Renderer, render_all};
use glam::Vec2;
use std::mem;
use std::time::Instant;
use tracing::{debug, info};

/// How a level frame ended, for the game session to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    Continue,
    PlayerDied,
    /// The player reached the portal.
    Completed,
}

fn to_world(point: (i32, i32)) -> Vec2 {
    Vec2::new(point.0 as f32, point.1 as f32)
}

/// One live playthrough of one level.
///
/// Owns every entity and block in the level. Nothing here outlives the level:
/// advancing or dying drops the whole session.
pub struct LevelSession {
    name: String,
    blocks: Vec<Block>,
    enemies: Vec<Enemy>,
    bullets: Vec<Bullet>,
    ammo: Vec<Ammo>,
    portal: Option<Portal>,
    player: Player,
}

impl LevelSession {
    /// Builds a fresh session from parsed level data.
    ///
    /// Fails without building anything if the level has no player spawn.
    pub fn load_from(name: &str, data: &LevelData) -> Result<Self, LevelError> {
        let spawn = data
            .player_spawn
            .ok_or_else(|| LevelError::MissingPlayerSpawn(name.to_string()))?;

        let session = LevelSession {
            name: name.to_string(),
            blocks: data.blocks.iter().map(|&(x, y)| Block::tile(x, y)).collect(),
            enemies: data.enemies.iter().map(|&p| Enemy::new(to_world(p))).collect(),
            bullets: Vec::new(),
            ammo: data.ammo.iter().map(|&p| Ammo::new(to_world(p))).collect(),
            portal: data.level_end.map(|p| Portal::new(to_world(p))),
            player: Player::new(to_world(spawn)),
        };

        info!(
            level = name,
            blocks = session.blocks.len(),
            enemies = session.enemies.len(),
            ammo = session.ammo.len(),
            has_portal = session.portal.is_some(),
            "level loaded"
        );

        Ok(session)
    }

    /// Runs one frame: player, enemies, bullets, ammo, then the portal.
    pub fn update(&mut self, input: &impl InputSource, now: Instant) -> LevelOutcome {
        let status = self.player.update(input, &self.blocks, &mut self.bullets, now);

        for enemy in self.enemies.iter_mut() {
            enemy.update(&mut self.player, &self.blocks, now);
        }

        self.handle_bullets(now);
        self.handle_ammo_pickup();

        if status == PlayerStatus::Dead || !self.player.is_alive() {
            return LevelOutcome::PlayerDied;
        }

        match &self.portal {
            Some(portal) if portal.update(&self.player) => {
                info!(level = %self.name, "portal reached");
                LevelOutcome::Completed
            }
            _ => LevelOutcome::Continue,
        }
    }

    fn handle_bullets(&mut self, now: Instant) {
        let bullets = mem::take(&mut self.bullets);
        let (survivors, report) = resolve_bullets(bullets, &mut self.enemies, &self.blocks, now);

        if report.enemies_killed > 0 {
            debug!(
                killed = report.enemies_killed,
                remaining = self.enemies.len(),
                "bullets hit enemies"
            );
        }
        self.bullets = survivors;
    }

    fn handle_ammo_pickup(&mut self) {
        let ammo = mem::take(&mut self.ammo);
        let (remaining, collected) = collect_ammo(ammo, &self.player);

        if collected > 0 {
            self.player.collect_ammo(collected);
            debug!(collected, total = self.player.ammo_count(), "ammo picked up");
        }
        self.ammo = remaining;
    }

    /// Draws the level back to front: blocks, portal, ammo, player, enemies, bullets.
    pub fn render(&self, renderer: &mut impl Renderer) -> Result<(), String> {
        render_all(renderer, &self.blocks)?;
        if let Some(portal) = &self.portal {
            renderer.render(&portal.sprite_view())?;
        }
        render_all(renderer, &self.ammo)?;
        renderer.render(&self.player.sprite_view())?;
        render_all(renderer, &self.enemies)?;
        render_all(renderer, &self.bullets)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn ammo(&self) -> &[Ammo] {
        &self.ammo
    }

    pub fn portal(&self) -> Option<&Portal> {
        self.portal.as_ref()
    }
}
