/// SDL2 implementation of the renderer seam
///
/// There is no artwork: each sprite kind is a solid box whose colour depends
/// on its mode, with a small marker on the side it is facing. The
/// (kind, mode) -> colour table lives here, not in the entities.
use blue_squirrel::camera::Camera;
use blue_squirrel::entity::{EntityMode, Facing};
use blue_squirrel::render::{Renderer, SpriteKind, SpriteView};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const HITBOX_COLOR: Color = Color::RGB(255, 0, 0);
const EYE_COLOR: Color = Color::RGB(255, 255, 255);
const EYE_SIZE: u32 = 8;

/// Colour for a sprite in a given mode.
pub fn sprite_color(kind: SpriteKind, mode: EntityMode) -> Color {
    match (kind, mode) {
        (SpriteKind::Block(rgb), _) => Color::RGB(rgb.0, rgb.1, rgb.2),
        (SpriteKind::Player, EntityMode::Dying) => Color::RGB(90, 90, 110),
        (SpriteKind::Player, EntityMode::Jumping) => Color::RGB(110, 170, 255),
        (SpriteKind::Player, _) => Color::RGB(40, 110, 235),
        (SpriteKind::Enemy, EntityMode::Attacking) => Color::RGB(230, 40, 40),
        (SpriteKind::Enemy, EntityMode::Walking) => Color::RGB(170, 60, 170),
        (SpriteKind::Enemy, _) => Color::RGB(120, 40, 120),
        (SpriteKind::Bullet, _) => Color::RGB(255, 230, 60),
        (SpriteKind::Ammo, _) => Color::RGB(240, 150, 30),
        (SpriteKind::Portal, _) => Color::RGB(60, 230, 200),
    }
}

pub struct CanvasRenderer<'a> {
    canvas: &'a mut Canvas<Window>,
    camera: &'a Camera,
    show_hitboxes: bool,
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(canvas: &'a mut Canvas<Window>, camera: &'a Camera, show_hitboxes: bool) -> Self {
        CanvasRenderer {
            canvas,
            camera,
            show_hitboxes,
        }
    }

    fn screen_rect(&self, view: &SpriteView) -> Rect {
        let top_left = self.camera.box_to_screen(&view.bounds);
        Rect::new(
            top_left.x.round() as i32,
            top_left.y.round() as i32,
            view.bounds.size.x.round().max(1.0) as u32,
            view.bounds.size.y.round().max(1.0) as u32,
        )
    }

    /// Small square near the top of the box, on the facing side.
    fn draw_eye(&mut self, rect: Rect, facing: Facing) -> Result<(), String> {
        let inset = 4;
        let x = match facing {
            Facing::Right => rect.right() - EYE_SIZE as i32 - inset,
            Facing::Left => rect.left() + inset,
        };

        self.canvas.set_draw_color(EYE_COLOR);
        self.canvas.fill_rect(Rect::new(x, rect.top() + inset, EYE_SIZE, EYE_SIZE))
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn render(&mut self, view: &SpriteView) -> Result<(), String> {
        if !self.camera.is_visible(&view.bounds) {
            return Ok(());
        }

        let rect = self.screen_rect(view);
        self.canvas.set_draw_color(sprite_color(view.kind, view.mode));
        self.canvas.fill_rect(rect)?;

        if matches!(view.kind, SpriteKind::Player | SpriteKind::Enemy) {
            self.draw_eye(rect, view.facing)?;
        }

        if self.show_hitboxes {
            self.canvas.set_draw_color(HITBOX_COLOR);
            self.canvas.draw_rect(rect)?;
        }

        Ok(())
    }
}
