//! Top-down player movement from keyboard or gamepad input.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Player, PlayerStats, PLAYER_RADIUS};
use crate::arena::ARENA_SIZE;
use crate::core::GameState;

/// Per-axis deadzone applied to the gamepad left stick.
const STICK_DEADZONE: f32 = 0.15;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(
        Update,
        (player_movement, clamp_to_arena)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}

/// Translate input into the player's physics velocity.
///
/// A connected gamepad supersedes the keyboard: the left stick is analog,
/// so its magnitude scales speed (clamped to 1). Keyboard input produces
/// unit directions, with diagonals normalized so speed is uniform.
fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut query: Query<(&PlayerStats, &mut Velocity), With<Player>>,
) {
    let Ok((stats, mut velocity)) = query.get_single_mut() else {
        return;
    };

    let direction = if let Some(pad) = gamepads.iter().next() {
        apply_deadzone(pad.left_stick(), STICK_DEADZONE).clamp_length_max(1.0)
    } else {
        keyboard_direction(&keyboard)
    };

    velocity.linvel = direction * stats.move_speed;
}

/// Read WASD into a unit direction vector.
fn keyboard_direction(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) {
        direction.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction.y -= 1.0;
    }
    direction.normalize_or_zero()
}

/// Zero out stick axes inside the deadzone.
fn apply_deadzone(stick: Vec2, deadzone: f32) -> Vec2 {
    Vec2::new(
        if stick.x.abs() > deadzone { stick.x } else { 0.0 },
        if stick.y.abs() > deadzone { stick.y } else { 0.0 },
    )
}

/// Keep the player inside the field.
fn clamp_to_arena(mut query: Query<&mut Transform, With<Player>>) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };

    let bound = ARENA_SIZE / 2.0 - Vec2::splat(PLAYER_RADIUS);
    transform.translation.x = transform.translation.x.clamp(-bound.x, bound.x);
    transform.translation.y = transform.translation.y.clamp(-bound.y, bound.y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadzone_zeroes_small_axes() {
        let filtered = apply_deadzone(Vec2::new(0.1, -0.9), 0.15);
        assert_eq!(filtered, Vec2::new(0.0, -0.9));
    }

    #[test]
    fn deadzone_passes_large_axes() {
        let stick = Vec2::new(-0.5, 0.7);
        assert_eq!(apply_deadzone(stick, 0.15), stick);
    }
}
