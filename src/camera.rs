/// Side-scrolling camera
///
/// The camera keeps the player horizontally centred and a fixed fraction of
/// the viewport above the bottom edge. It also converts world coordinates
/// (y grows upward, boxes anchored bottom-left) into screen coordinates
/// (y grows downward, rects anchored top-left).
///
/// # Example
///
/// ```rust
/// use blue_squirrel::camera::Camera;
/// use glam::Vec2;
///
/// let mut camera = Camera::new(1280.0, 720.0, 0.25);
/// camera.follow(Vec2::new(1000.0, 300.0));
///
/// // The followed point lands mid-screen, a quarter up from the bottom
/// assert_eq!(camera.world_to_screen(Vec2::new(1000.0, 300.0)), Vec2::new(640.0, 540.0));
/// ```
use crate::collision::Aabb;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World position of the viewport's bottom-left corner.
    pub origin: Vec2,
    pub viewport: Vec2,
    pub y_fraction: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32, y_fraction: f32) -> Self {
        Camera {
            origin: Vec2::ZERO,
            viewport: Vec2::new(viewport_width, viewport_height),
            y_fraction,
        }
    }

    pub fn follow(&mut self, target: Vec2) {
        self.origin = target - Vec2::new(self.viewport.x / 2.0, self.viewport.y * self.y_fraction);
    }

    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        let relative = point - self.origin;
        Vec2::new(relative.x, self.viewport.y - relative.y)
    }

    /// Screen-space top-left corner of a world box. The size is unchanged.
    pub fn box_to_screen(&self, bounds: &Aabb) -> Vec2 {
        self.world_to_screen(Vec2::new(bounds.left(), bounds.top()))
    }

    /// Whether any part of `bounds` is inside the viewport.
    pub fn is_visible(&self, bounds: &Aabb) -> bool {
        let top_left = self.box_to_screen(bounds);

        top_left.x < self.viewport.x
            && top_left.x + bounds.size.x > 0.0
            && top_left.y < self.viewport.y
            && top_left.y + bounds.size.y > 0.0
    }
}
