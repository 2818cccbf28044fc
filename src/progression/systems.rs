//! Progression systems - shard pickups and level-ups.

use bevy::prelude::*;
use rand::Rng;

use super::components::{apply_level_growth, Experience, Shard};
use crate::combat::Health;
use crate::core::ShardPickupEvent;
use crate::player::{Player, PlayerStats};

/// Grant experience for collected shards.
pub fn apply_shard_pickups(
    mut pickup_events: EventReader<ShardPickupEvent>,
    mut query: Query<(&PlayerStats, &mut Experience), With<Player>>,
) {
    let mut rng = rand::thread_rng();

    for event in pickup_events.read() {
        let Ok((stats, mut experience)) = query.get_mut(event.player) else {
            continue;
        };
        experience.grant(shard_xp(
            event.xp_value,
            stats.xp_modifier,
            stats.luck,
            &mut rng,
        ));
    }
}

/// Resolve pending level-ups, applying stat growth per level gained.
pub fn resolve_level_ups(
    mut query: Query<(&mut PlayerStats, &mut Experience, &mut Health), With<Player>>,
) {
    let Ok((mut stats, mut experience, mut health)) = query.get_single_mut() else {
        return;
    };

    while experience.try_level_up() {
        apply_level_growth(&mut stats, &mut health);
        info!("Reached level {}", experience.level);
    }
}

/// Experience granted by one shard: modifier applied, with a luck percent
/// chance of a double payout.
fn shard_xp(value: f32, xp_modifier: f32, luck: f32, rng: &mut impl Rng) -> f32 {
    let base = value * xp_modifier;
    if rng.gen_range(0.0..100.0) < luck {
        base * 2.0
    } else {
        base
    }
}

/// Remove uncollected shards when the run ends.
pub fn cleanup_shards(mut commands: Commands, query: Query<Entity, With<Shard>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn modifier_scales_pickup() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(shard_xp(25.0, 1.0, 0.0, &mut rng), 25.0);
        assert_eq!(shard_xp(25.0, 2.0, 0.0, &mut rng), 50.0);
    }

    #[test]
    fn full_luck_always_doubles() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            assert_eq!(shard_xp(25.0, 1.0, 100.0, &mut rng), 50.0);
        }
    }
}
