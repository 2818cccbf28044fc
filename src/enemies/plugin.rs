//! Enemy plugin - registers spawning and pursuit systems.

use bevy::prelude::*;

use super::components::Enemy;
use super::data::{load_enemy_definitions, load_spawner_config, EnemyRegistry, SpawnerConfig};
use super::pursuit::pursue_player;
use super::spawning::{reset_spawn_timer, spawn_enemies, SpawnTimer};
use crate::core::GameState;

/// Enemy plugin - handles enemy data, spawning, and pursuit.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>()
            .init_resource::<SpawnerConfig>()
            .init_resource::<SpawnTimer>()
            .add_systems(
                OnEnter(GameState::Loading),
                (load_enemy_definitions, load_spawner_config),
            )
            .add_systems(OnEnter(GameState::InGame), reset_spawn_timer)
            .add_systems(
                Update,
                (spawn_enemies, pursue_player).run_if(in_state(GameState::InGame)),
            )
            .add_systems(OnExit(GameState::InGame), cleanup_enemies);
    }
}

/// Despawn every enemy when the run ends.
fn cleanup_enemies(mut commands: Commands, query: Query<Entity, With<Enemy>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
