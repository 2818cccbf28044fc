//! Enemy pursuit behavior.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Enemy, EnemyStats};
use crate::player::Player;

/// Steer every enemy toward the player's current position.
///
/// There is no detection range or state machine: enemies always converge.
pub fn pursue_player(
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(&Transform, &EnemyStats, &mut Velocity), With<Enemy>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, stats, mut velocity) in enemy_query.iter_mut() {
        let direction = (player_pos - transform.translation.truncate()).normalize_or_zero();
        velocity.linvel = direction * stats.move_speed;
    }
}
