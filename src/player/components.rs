//! Player-related components.

use bevy::prelude::*;

/// Collision radius of the player in world units.
pub const PLAYER_RADIUS: f32 = 16.0;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Player's runtime statistics.
///
/// Mutated in place by level-ups; rebuilt from the loaded definition on
/// every run, which is what resets stats after death.
#[derive(Component, Clone, Debug)]
pub struct PlayerStats {
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Flat reduction applied to incoming damage
    pub defense: f32,
    /// Damage carried by each projectile
    pub damage: f32,
    /// Seconds between auto-fire shots
    pub attack_interval: f32,
    /// Percent chance (0-100) that a shard pickup is doubled
    pub luck: f32,
    /// Multiplier applied to all experience gains
    pub xp_modifier: f32,
}
