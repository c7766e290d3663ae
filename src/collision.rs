/// Collision detection primitives for the platformer
///
/// This module provides AABB (Axis-Aligned Bounding Box) geometry plus the three
/// predicates the physics step is built on: plain overlap, landing on top of a
/// surface, and bumping into the side of a surface.
///
/// # Architecture
///
/// - `Aabb`: position (bottom-left corner) + size, with a derived center
/// - `Collidable` trait: implemented by anything that has bounds in the world
/// - Predicate functions: pure, stateless, no side effects
///
/// # Coordinate System
///
/// World space has `y` growing *upward*. An `Aabb` at `(0, 0)` with size
/// `(30, 30)` covers `x ∈ [0, 30]` and `y ∈ [0, 30]`.
///
/// # Probing, not overlap
///
/// Ground and wall checks are "would moving by this much collide?" questions:
/// callers pass the entity's current velocity as the offset *before* it moves.
/// At the game's low fixed speeds this keeps entities from sinking into terrain.
use glam::Vec2;

/// Lower edge of the vertical band used by side collisions, as a fraction of height.
pub const SIDE_BAND_LOW: f32 = 0.25;

/// Upper edge of the vertical band used by side collisions, as a fraction of height.
pub const SIDE_BAND_HIGH: f32 = 0.75;

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub position: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Aabb {
            position: Vec2::new(x, y),
            size: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    pub fn from_parts(position: Vec2, size: Vec2) -> Self {
        Aabb::new(position.x, position.y, size.x, size.y)
    }

    /// `position + size / 2`
    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y
    }

    pub fn top(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Returns a copy of this box moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Aabb {
            position: self.position + offset,
            size: self.size,
        }
    }
}

/// Trait for anything that occupies space in the level.
///
/// # Design Pattern: Trait-based Polymorphism
///
/// Players, enemies, bullets, pickups and blocks all expose their bounds through
/// this trait, so helpers like [`first_overlapping`] work on any of them.
pub trait Collidable {
    /// Returns the current bounding box in world space.
    fn bounds(&self) -> Aabb;

    /// Plain overlap test (no offset) against another collidable.
    fn is_colliding<T: Collidable + ?Sized>(&self, other: &T) -> bool {
        overlaps(&self.bounds(), &other.bounds(), Vec2::ZERO)
    }
}

impl Collidable for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}

/// Checks if two boxes intersect after translating `a` by `offset`.
///
/// All four edges are *inclusive*, so boxes that merely touch count as
/// overlapping. Used for pickup, portal and bullet contact.
///
/// # Example
///
/// ```rust
/// use blue_squirrel::collision::{overlaps, Aabb};
/// use glam::Vec2;
///
/// let a = Aabb::new(0.0, 0.0, 30.0, 30.0);
/// let b = Aabb::new(30.0, 0.0, 30.0, 30.0);
/// assert!(overlaps(&a, &b, Vec2::ZERO)); // touching edges
/// ```
pub fn overlaps(a: &Aabb, b: &Aabb, offset: Vec2) -> bool {
    let moved = a.translated(offset);

    moved.left() <= b.right()
        && moved.right() >= b.left()
        && moved.bottom() <= b.top()
        && moved.top() >= b.bottom()
}

/// Checks whether `a`, dropped by `y_offset`, would land on top of `b`.
///
/// The horizontal extents must overlap with *exclusive* edges, and the shifted
/// bottom edge of `a` must fall strictly inside `b`'s vertical extent.
///
/// Only meaningful while `a` is falling or resting (vertical velocity ≤ 0).
pub fn bottom_colliding(a: &Aabb, b: &Aabb, y_offset: f32) -> bool {
    let probe_y = a.bottom() + y_offset;

    a.left() < b.right() && a.right() > b.left() && probe_y < b.top() && probe_y > b.bottom()
}

/// Checks whether `a`, moved sideways by `x_offset`, would push into `b`.
///
/// Either shifted vertical edge of `a` must land strictly inside `b`'s
/// horizontal extent. Vertically, only the middle band of `a` (25%–75% of its
/// height, measured from its bottom) is tested, so an entity grazing a corner
/// while landing isn't stopped by a phantom wall.
///
/// Only meaningful while `a` is moving horizontally.
pub fn side_colliding(a: &Aabb, b: &Aabb, x_offset: f32) -> bool {
    let band_low = a.bottom() + a.size.y * SIDE_BAND_LOW;
    let band_high = a.bottom() + a.size.y * SIDE_BAND_HIGH;
    let band_overlaps = band_low < b.top() && band_high > b.bottom();

    if !band_overlaps {
        return false;
    }

    let left_edge = a.left() + x_offset;
    let right_edge = a.right() + x_offset;
    let inside = |edge: f32| edge > b.left() && edge < b.right();

    inside(left_edge) || inside(right_edge)
}

/// Returns the index of the first item in `others` overlapping `entity`.
///
/// Short-circuits on the first hit, which is what single-target projectiles
/// need. An empty slice simply yields `None`.
pub fn first_overlapping<T: Collidable>(entity: &impl Collidable, others: &[T]) -> Option<usize> {
    let bounds = entity.bounds();

    others
        .iter()
        .position(|other| overlaps(&bounds, &other.bounds(), Vec2::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Aabb {
        Aabb::new(0.0, 0.0, 30.0, 30.0)
    }

    #[test]
    fn test_center_is_derived_from_position_and_size() {
        let rect = Aabb::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let rect = Aabb::new(0.0, 0.0, -5.0, 10.0);
        assert_eq!(rect.size, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        let cases = [
            (Aabb::new(0.0, 0.0, 32.0, 32.0), Aabb::new(16.0, 16.0, 32.0, 32.0)),
            (Aabb::new(0.0, 0.0, 32.0, 32.0), Aabb::new(100.0, 100.0, 32.0, 32.0)),
            (Aabb::new(0.0, 0.0, 100.0, 100.0), Aabb::new(25.0, 25.0, 50.0, 50.0)),
            (Aabb::new(0.0, 0.0, 30.0, 30.0), Aabb::new(30.0, 30.0, 10.0, 10.0)),
            (Aabb::new(-40.0, 5.0, 10.0, 70.0), Aabb::new(-31.0, 74.0, 75.0, 75.0)),
        ];

        for (a, b) in cases {
            assert_eq!(overlaps(&a, &b, Vec2::ZERO), overlaps(&b, &a, Vec2::ZERO));
        }
    }

    #[test]
    fn test_overlaps_touching_edges_is_inclusive() {
        let a = block();
        let b = Aabb::new(30.0, 0.0, 30.0, 30.0);

        assert!(overlaps(&a, &b, Vec2::ZERO));
        assert!(!overlaps(&a, &b, Vec2::new(-0.5, 0.0)));
    }

    #[test]
    fn test_overlaps_with_offset() {
        let a = block();
        let b = Aabb::new(50.0, 0.0, 30.0, 30.0);

        assert!(!overlaps(&a, &b, Vec2::ZERO));
        assert!(overlaps(&a, &b, Vec2::new(25.0, 0.0)));
    }

    #[test]
    fn test_bottom_collision_threshold() {
        let entity = Aabb::new(0.0, 30.0, 30.0, 30.0);

        assert!(bottom_colliding(&entity, &block(), -1.0));
        assert!(!bottom_colliding(&entity, &block(), -31.0));
        // Resting exactly on the top edge is not "inside" yet
        assert!(!bottom_colliding(&entity, &block(), 0.0));
    }

    #[test]
    fn test_bottom_collision_needs_horizontal_overlap() {
        // Directly beside the block, edges touching: exclusive check fails
        let entity = Aabb::new(30.0, 30.0, 30.0, 30.0);
        assert!(!bottom_colliding(&entity, &block(), -1.0));
    }

    #[test]
    fn test_side_collision_moving_right_into_block() {
        // Entity left of the block, same height
        let entity = Aabb::new(-30.0, 0.0, 30.0, 30.0);

        assert!(side_colliding(&entity, &block(), 5.0));
        assert!(!side_colliding(&entity, &block(), 0.0));
    }

    #[test]
    fn test_side_collision_moving_left_into_block() {
        let entity = Aabb::new(30.0, 0.0, 30.0, 30.0);

        assert!(side_colliding(&entity, &block(), -5.0));
        assert!(!side_colliding(&entity, &block(), 5.0));
    }

    #[test]
    fn test_side_collision_corner_exclusion() {
        // Entity's bottom 25% dips into the top of the block; that's a corner graze
        let entity = Aabb::new(-30.0, 25.0, 30.0, 40.0);
        assert!(!side_colliding(&entity, &block(), 5.0));

        // Entity's top 25% reaches into the bottom of the block
        let entity = Aabb::new(-30.0, -35.0, 30.0, 40.0);
        assert!(!side_colliding(&entity, &block(), 5.0));

        // Lower the entity until the middle band reaches the block
        let entity = Aabb::new(-30.0, 15.0, 30.0, 40.0);
        assert!(side_colliding(&entity, &block(), 5.0));
    }

    #[test]
    fn test_first_overlapping_short_circuits() {
        let bullet = Aabb::new(5.0, 5.0, 10.0, 10.0);
        let targets = vec![
            Aabb::new(100.0, 0.0, 10.0, 10.0),
            Aabb::new(0.0, 0.0, 10.0, 10.0),
            Aabb::new(8.0, 8.0, 10.0, 10.0),
        ];

        assert_eq!(first_overlapping(&bullet, &targets), Some(1));
    }

    #[test]
    fn test_first_overlapping_empty_collection() {
        let bullet = Aabb::new(5.0, 5.0, 10.0, 10.0);
        let targets: Vec<Aabb> = Vec::new();

        assert_eq!(first_overlapping(&bullet, &targets), None);
    }
}
