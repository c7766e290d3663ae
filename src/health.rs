//! Health and damage bookkeeping
//!
//! Health is a small newtype-style wrapper so damage can never push the value
//! below zero, and every hit reports what it actually did.
//!
//! # Rust Learning Notes
//!
//! - **NewType Pattern**: `Health` wraps an `f32` with rules attached
//! - **Constructors as documentation**: `DamageEvent::enemy_attack(..)` reads
//!   better than a bare number at the call site

/// Where a hit came from. Used for logging and for telling deaths apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    /// Melee hit from an enemy in attack range
    Enemy,
    /// Attrition from having fallen out of the world
    Fall,
}

/// A single application of damage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    pub amount: f32,
    pub source: DamageSource,
}

impl DamageEvent {
    pub fn enemy_attack(amount: f32) -> Self {
        DamageEvent {
            amount,
            source: DamageSource::Enemy,
        }
    }

    pub fn fall(amount: f32) -> Self {
        DamageEvent {
            amount,
            source: DamageSource::Fall,
        }
    }
}

/// Result of a damage operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageResult {
    /// Actual damage dealt (less than requested if the target ran out of health)
    pub damage_dealt: f32,
    /// Whether this damage took health to zero
    pub is_fatal: bool,
}

/// Hit points with a fixed maximum.
///
/// # Example
///
/// ```rust
/// use blue_squirrel::health::Health;
///
/// let mut health = Health::new(100.0);
/// let result = health.take_damage(150.0);
/// assert_eq!(result.damage_dealt, 100.0);
/// assert!(result.is_fatal);
/// assert_eq!(health.current(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// Creates a new Health instance with full health
    pub fn new(max: f32) -> Self {
        Health { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Returns health as a fraction of max (0.0 to 1.0)
    pub fn percentage(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Applies damage, never dropping below zero.
    pub fn take_damage(&mut self, amount: f32) -> DamageResult {
        let old_health = self.current;
        self.current = (self.current - amount).max(0.0);

        DamageResult {
            damage_dealt: old_health - self.current,
            is_fatal: self.current <= 0.0,
        }
    }
}
