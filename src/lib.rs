//! Duskswarm - a top-down survival arcade game in Bevy.
//!
//! The player drifts around a fixed field while enemies pour in from the
//! edges and converge; projectiles auto-fire at the nearest threat and
//! fallen enemies drop experience shards that drive leveling.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, data file loading
//! - **Arena**: The playing field, camera, and backdrop
//! - **Player**: Movement, stats, spawning
//! - **Enemies**: Definitions, edge spawning with elite rolls, pursuit
//! - **Combat**: Auto-fire, collisions, damage, deaths
//! - **Progression**: Experience shards, leveling, stat growth
//! - **UI**: Menus, HUD, score

pub mod arena;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod progression;
pub mod ui;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct DuskswarmPlugin;

impl Plugin for DuskswarmPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // The playing field
            .add_plugins(arena::ArenaPlugin)
            // Player systems
            .add_plugins(player::PlayerPlugin)
            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)
            // Combat systems
            .add_plugins(combat::CombatPlugin)
            // Progression systems
            .add_plugins(progression::ProgressionPlugin)
            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
