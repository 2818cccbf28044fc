//! Enemy spawning - timed spawns in the ring outside the field, with
//! elite rolls.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::seq::IteratorRandom;
use rand::Rng;

use super::components::{Elite, Enemy, ELITE_SCALE, ENEMY_RADIUS};
use super::data::{EnemyRegistry, SpawnerConfig};
use crate::arena::ARENA_SIZE;
use crate::combat::Health;

/// Distance from the field edge to the inner edge of the spawn ring.
const SPAWN_MARGIN: f32 = 50.0;

/// Width of the spawn ring.
const SPAWN_BAND: f32 = 50.0;

const ENEMY_COLOR: Color = Color::srgb(0.78, 0.2, 0.2);
const ELITE_COLOR: Color = Color::srgb(0.59, 0.2, 0.78);

/// Repeating timer driving enemy spawns.
#[derive(Resource)]
pub struct SpawnTimer(pub Timer);

impl Default for SpawnTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(0.8, TimerMode::Repeating))
    }
}

/// Arm the spawn timer from the loaded cadence at the start of a run.
pub fn reset_spawn_timer(mut timer: ResMut<SpawnTimer>, config: Res<SpawnerConfig>) {
    timer
        .0
        .set_duration(std::time::Duration::from_secs_f32(config.interval_ms / 1000.0));
    timer.0.reset();
}

/// Spawn one enemy per timer tick just outside the visible field.
pub fn spawn_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<SpawnTimer>,
    registry: Res<EnemyRegistry>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }

    let mut rng = rand::thread_rng();
    let Some(definition) = registry.definitions.values().choose(&mut rng) else {
        return;
    };

    let is_elite = roll_elite(definition.elite_probability, &mut rng);
    let definition = if is_elite {
        debug!("Elite spawn: {}", definition.name);
        definition.elite()
    } else {
        definition.clone()
    };

    let position = ring_spawn_point(ARENA_SIZE / 2.0, SPAWN_MARGIN, SPAWN_BAND, &mut rng);
    let (color, radius) = if is_elite {
        (ELITE_COLOR, ENEMY_RADIUS * ELITE_SCALE)
    } else {
        (ENEMY_COLOR, ENEMY_RADIUS)
    };

    let mut enemy = commands.spawn((
        Enemy,
        definition.to_stats(),
        Health::new(definition.max_health),
        Sprite::from_color(color, Vec2::splat(radius * 2.0)),
        Transform::from_xyz(position.x, position.y, 2.0),
        RigidBody::Dynamic,
        Collider::ball(radius),
        LockedAxes::ROTATION_LOCKED,
        GravityScale(0.0),
        Velocity::zero(),
        ActiveEvents::COLLISION_EVENTS,
    ));
    if is_elite {
        enemy.insert(Elite);
    }
}

/// Percent roll for an elite spawn.
fn roll_elite(probability: f32, rng: &mut impl Rng) -> bool {
    rng.gen_range(0.0..100.0) < probability
}

/// Uniformly distributed point in the rectangular ring around the field.
///
/// The ring starts `margin` outside the field half-extents and is `band`
/// wide. Sampling picks one of the four edge bands weighted by area (the
/// corners belong to the top and bottom bands), then a uniform point
/// within it.
fn ring_spawn_point(half: Vec2, margin: f32, band: f32, rng: &mut impl Rng) -> Vec2 {
    let inner = half + Vec2::splat(margin);
    let outer = inner + Vec2::splat(band);

    let horizontal_area = 2.0 * outer.x * band;
    let vertical_area = 2.0 * inner.y * band;
    let mut pick = rng.gen_range(0.0..2.0 * (horizontal_area + vertical_area));

    // Top band (corners included)
    if pick < horizontal_area {
        return Vec2::new(
            rng.gen_range(-outer.x..outer.x),
            rng.gen_range(inner.y..outer.y),
        );
    }
    pick -= horizontal_area;

    // Bottom band (corners included)
    if pick < horizontal_area {
        return Vec2::new(
            rng.gen_range(-outer.x..outer.x),
            rng.gen_range(-outer.y..-inner.y),
        );
    }
    pick -= horizontal_area;

    // Left band
    if pick < vertical_area {
        return Vec2::new(
            rng.gen_range(-outer.x..-inner.x),
            rng.gen_range(-inner.y..inner.y),
        );
    }

    // Right band
    Vec2::new(
        rng.gen_range(inner.x..outer.x),
        rng.gen_range(-inner.y..inner.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn elite_roll_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(!roll_elite(0.0, &mut rng));
            assert!(roll_elite(100.0, &mut rng));
        }
    }

    #[test]
    fn elite_roll_distributes_within_configured_bound() {
        let mut rng = StdRng::seed_from_u64(11);
        let hits = (0..10_000).filter(|_| roll_elite(10.0, &mut rng)).count();
        // 10% of 10k with generous slack
        assert!((700..1300).contains(&hits), "got {hits} elites");
    }

    #[test]
    fn spawn_points_stay_inside_the_ring() {
        let mut rng = StdRng::seed_from_u64(42);
        let half = Vec2::new(960.0, 540.0);

        for _ in 0..5000 {
            let p = ring_spawn_point(half, 50.0, 50.0, &mut rng);
            let outside_inner = p.x.abs() > half.x + 50.0 || p.y.abs() > half.y + 50.0;
            let inside_outer = p.x.abs() <= half.x + 100.0 && p.y.abs() <= half.y + 100.0;
            assert!(outside_inner, "point {p} inside the inner rectangle");
            assert!(inside_outer, "point {p} outside the outer rectangle");
        }
    }
}
