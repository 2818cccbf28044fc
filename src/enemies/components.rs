//! Enemy-related components.

use bevy::prelude::*;

/// Collision radius of an enemy in world units.
pub const ENEMY_RADIUS: f32 = 12.0;

/// Size multiplier for elite sprites and colliders.
pub const ELITE_SCALE: f32 = 1.4;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Marker for elite enemies (scaled stats, bigger sprite, bigger reward).
#[derive(Component)]
pub struct Elite;

/// Enemy runtime stats, copied from the definition at spawn time.
///
/// Elites carry the multiplied values; the definitions themselves are
/// never mutated.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct EnemyStats {
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Damage dealt to the player on contact
    pub damage: f32,
    /// Multiplier on the value of the dropped xp shard
    pub shard_bonus: f32,
}
