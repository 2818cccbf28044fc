//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The collision handlers
//! send DamageEvents and ShardPickupEvents, and the damage and progression
//! systems receive them. This keeps systems independent and testable.

use bevy::prelude::*;

/// Sent when an entity takes damage.
///
/// The damage system listens for these and applies the actual health
/// reduction, taking the player's defense into account.
#[derive(Event)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Base damage amount before defense
    pub amount: f32,
}

/// Sent when the player touches an xp shard.
///
/// Carries the shard's value as dropped; the progression system applies
/// the xp modifier and luck on top.
#[derive(Event)]
pub struct ShardPickupEvent {
    /// The player entity
    pub player: Entity,
    /// Experience carried by the shard
    pub xp_value: f32,
}

/// Sent when a kill should be counted toward the score.
#[derive(Event)]
pub struct ScoreEvent {
    /// Points awarded (elites are worth more)
    pub amount: u32,
}
