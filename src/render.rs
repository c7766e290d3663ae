/// Rendering seam between the simulation and whatever draws it
///
/// The simulation never draws anything itself. Each frame it describes every
/// visible object as a [`SpriteView`] and hands it to a [`Renderer`]; the
/// renderer owns all artwork, including the lookup from (kind, mode) to the
/// sprite or colour it shows.
///
/// # Architecture
///
/// - `Renderable` trait: implemented by every drawable level object
/// - `Renderer` trait: implemented by the front end (SDL2 canvas, test recorder)
/// - `render_all()`: draws a slice of renderables in order
use crate::block::{Block, Rgb};
use crate::bullet::Bullet;
use crate::collision::{Aabb, Collidable};
use crate::enemy::Enemy;
use crate::entity::{Body, EntityMode, Facing};
use crate::pickup::{Ammo, Portal};
use crate::player::Player;

/// Which kind of object a view describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Block(Rgb),
    Player,
    Enemy,
    Bullet,
    Ammo,
    Portal,
}

/// Everything a renderer needs to draw one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteView {
    pub kind: SpriteKind,
    pub bounds: Aabb,
    pub facing: Facing,
    pub mode: EntityMode,
}

impl SpriteView {
    fn from_body(kind: SpriteKind, body: &Body) -> Self {
        SpriteView {
            kind,
            bounds: body.bounds(),
            facing: body.facing,
            mode: body.mode,
        }
    }
}

/// Draws sprite views. Errors are plain strings, like SDL2's own.
pub trait Renderer {
    fn render(&mut self, view: &SpriteView) -> Result<(), String>;
}

/// Trait for level objects that can describe themselves to a renderer.
pub trait Renderable {
    fn sprite_view(&self) -> SpriteView;
}

impl Renderable for Block {
    fn sprite_view(&self) -> SpriteView {
        SpriteView {
            kind: SpriteKind::Block(self.color),
            bounds: self.bounds(),
            facing: Facing::default(),
            mode: EntityMode::Idle,
        }
    }
}

impl Renderable for Player {
    fn sprite_view(&self) -> SpriteView {
        SpriteView::from_body(SpriteKind::Player, &self.body)
    }
}

impl Renderable for Enemy {
    fn sprite_view(&self) -> SpriteView {
        SpriteView::from_body(SpriteKind::Enemy, &self.body)
    }
}

impl Renderable for Bullet {
    fn sprite_view(&self) -> SpriteView {
        SpriteView::from_body(SpriteKind::Bullet, &self.body)
    }
}

impl Renderable for Ammo {
    fn sprite_view(&self) -> SpriteView {
        SpriteView::from_body(SpriteKind::Ammo, &self.body)
    }
}

impl Renderable for Portal {
    fn sprite_view(&self) -> SpriteView {
        SpriteView::from_body(SpriteKind::Portal, &self.body)
    }
}

/// Renders every item in order, stopping at the first error.
pub fn render_all<T: Renderable>(renderer: &mut impl Renderer, items: &[T]) -> Result<(), String> {
    for item in items {
        renderer.render(&item.sprite_view())?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use glam::Vec2;

    /// Records every view it is asked to draw.
    #[derive(Default)]
    pub(crate) struct RecordingRenderer {
        pub views: Vec<SpriteView>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, view: &SpriteView) -> Result<(), String> {
            self.views.push(*view);
            Ok(())
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&mut self, _view: &SpriteView) -> Result<(), String> {
            Err("canvas lost".to_string())
        }
    }

    #[test]
    fn test_player_view_carries_facing_and_mode() {
        let mut player = Player::new(Vec2::new(10.0, 20.0));
        player.body.facing = Facing::Left;
        player.body.mode = EntityMode::Walking;

        let view = player.sprite_view();

        assert_eq!(view.kind, SpriteKind::Player);
        assert_eq!(view.bounds.position, Vec2::new(10.0, 20.0));
        assert_eq!(view.facing, Facing::Left);
        assert_eq!(view.mode, EntityMode::Walking);
    }

    #[test]
    fn test_block_view_carries_color() {
        let view = Block::tile(0, 0).sprite_view();
        assert_eq!(view.kind, SpriteKind::Block(Rgb::WHITE));
    }

    #[test]
    fn test_render_all_in_order() {
        let mut renderer = RecordingRenderer::default();
        let blocks = vec![Block::tile(0, 0), Block::tile(30, 0)];

        render_all(&mut renderer, &blocks).unwrap();

        assert_eq!(renderer.views.len(), 2);
        assert_eq!(renderer.views[1].bounds.position, Vec2::new(30.0, 0.0));
    }

    #[test]
    fn test_render_all_propagates_errors() {
        let blocks = vec![Block::tile(0, 0)];
        let result = render_all(&mut FailingRenderer, &blocks);

        assert_eq!(result, Err("canvas lost".to_string()));
    }
}
