//! Player plugin - spawning, movement, and the player stat table.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::data::{load_player_definition, PlayerDefinition};
use super::movement;
use crate::combat::Health;
use crate::core::GameState;
use crate::progression::Experience;

const PLAYER_COLOR: Color = Color::srgb(0.93, 0.93, 0.93);

/// Player plugin - handles the player definition, spawning, and movement.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);

        app.init_resource::<PlayerDefinition>()
            .add_systems(OnEnter(GameState::Loading), load_player_definition)
            .add_systems(OnEnter(GameState::InGame), spawn_player)
            .add_systems(OnExit(GameState::InGame), cleanup_player);
    }
}

/// Spawn the player at the field center with stats from the definition.
fn spawn_player(mut commands: Commands, definition: Res<PlayerDefinition>) {
    commands.spawn((
        Player,
        definition.to_stats(),
        Health::new(definition.max_health),
        Experience::new(definition.level_up_requirement),
        Sprite::from_color(PLAYER_COLOR, Vec2::splat(PLAYER_RADIUS * 2.0)),
        Transform::from_xyz(0.0, 0.0, 3.0),
        RigidBody::Dynamic,
        Collider::ball(PLAYER_RADIUS),
        LockedAxes::ROTATION_LOCKED,
        GravityScale(0.0),
        Velocity::zero(),
        ActiveEvents::COLLISION_EVENTS,
    ));
}

/// Despawn the player when the run ends.
fn cleanup_player(mut commands: Commands, query: Query<Entity, With<Player>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
