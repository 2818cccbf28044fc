//! Progression plugin - registers xp and level-up systems.

use bevy::prelude::*;

use super::data::{load_shard_config, ShardConfig};
use super::systems::{apply_shard_pickups, cleanup_shards, resolve_level_ups};
use crate::core::GameState;

/// Progression plugin - shard pickups, experience, and leveling.
pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShardConfig>()
            .add_systems(OnEnter(GameState::Loading), load_shard_config)
            .add_systems(
                Update,
                (apply_shard_pickups, resolve_level_ups)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(OnExit(GameState::InGame), cleanup_shards);
    }
}
