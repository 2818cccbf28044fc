//! Arena plugin - spawns the camera and the playing field backdrop.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::GameState;

/// Size of the playing field in world units.
///
/// The camera is fitted to this rectangle, so the whole field is always
/// visible regardless of window size or aspect ratio.
pub const ARENA_SIZE: Vec2 = Vec2::new(1920.0, 1080.0);

/// Backdrop color of the field.
const FIELD_COLOR: Color = Color::srgb(0.102, 0.102, 0.102);

/// Marker for the field backdrop.
#[derive(Component)]
struct FieldBackdrop;

/// Arena plugin - camera setup and per-run backdrop.
pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(GameState::InGame), spawn_backdrop)
            .add_systems(OnExit(GameState::InGame), cleanup_backdrop);
    }
}

/// Spawn the single persistent 2D camera.
///
/// AutoMin keeps the full field in view and letterboxes the rest, the same
/// fit-to-screen behavior as a fixed-size canvas scaled into a window.
fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: ARENA_SIZE.x,
                min_height: ARENA_SIZE.y,
            },
            ..OrthographicProjection::default_2d()
        },
    ));
}

/// Spawn the dark field backdrop for the duration of a run.
fn spawn_backdrop(mut commands: Commands) {
    commands.spawn((
        Sprite::from_color(FIELD_COLOR, ARENA_SIZE),
        Transform::from_xyz(0.0, 0.0, 0.0),
        FieldBackdrop,
    ));
}

/// Remove the backdrop when leaving gameplay.
fn cleanup_backdrop(mut commands: Commands, query: Query<Entity, With<FieldBackdrop>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
