//! Combat systems - auto-fire, collision handling, damage, and deaths.

use std::collections::HashSet;

use bevy::prelude::*;
use bevy::time::Stopwatch;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::data::{load_weapon_config, WeaponConfig};
use crate::arena::ARENA_SIZE;
use crate::core::{GameState, ScoreEvent, ShardPickupEvent};
use crate::enemies::{Elite, Enemy, EnemyStats, ELITE_SCALE, ENEMY_RADIUS};
use crate::player::{Player, PlayerStats, PLAYER_RADIUS};
use crate::progression::{Shard, ShardConfig, SHARD_RADIUS};

const PROJECTILE_COLOR: Color = Color::srgb(1.0, 0.83, 0.24);
const SHARD_COLOR: Color = Color::srgb(0.24, 0.86, 0.71);

/// System set ordering for combat.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    Fire,
    Collide,
    Damage,
    Resolve,
}

/// Time since the last shot.
///
/// Compared against the player's current attack interval instead of a
/// fixed-duration timer, so level-ups shorten the cadence immediately.
#[derive(Resource, Default)]
pub struct FireClock(pub Stopwatch);

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app.init_resource::<WeaponConfig>()
        .init_resource::<FireClock>()
        .add_systems(OnEnter(GameState::Loading), load_weapon_config)
        .configure_sets(
            Update,
            (
                CombatSet::Fire,
                CombatSet::Collide,
                CombatSet::Damage,
                CombatSet::Resolve,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(Update, auto_fire.in_set(CombatSet::Fire))
        .add_systems(
            Update,
            (handle_collisions, contact_damage).in_set(CombatSet::Collide),
        )
        .add_systems(Update, apply_damage.in_set(CombatSet::Damage))
        .add_systems(
            Update,
            (
                resolve_enemy_deaths,
                check_player_death,
                tick_hit_cooldowns,
                despawn_stray_projectiles,
            )
                .in_set(CombatSet::Resolve),
        )
        .add_systems(OnEnter(GameState::InGame), reset_fire_clock)
        .add_systems(OnExit(GameState::InGame), cleanup_projectiles);
}

/// Start each run with an empty fire clock.
fn reset_fire_clock(mut clock: ResMut<FireClock>) {
    clock.0.reset();
}

/// Fire a projectile at the nearest enemy whenever the attack interval
/// has elapsed.
///
/// With no enemies alive the clock simply stays expired, so the next
/// spawn is shot at immediately.
fn auto_fire(
    mut commands: Commands,
    time: Res<Time>,
    mut clock: ResMut<FireClock>,
    weapon: Res<WeaponConfig>,
    player_query: Query<(&Transform, &PlayerStats), With<Player>>,
    enemy_query: Query<&Transform, (With<Enemy>, Without<Player>)>,
) {
    clock.0.tick(time.delta());

    let Ok((player_transform, stats)) = player_query.get_single() else {
        return;
    };
    if clock.0.elapsed_secs() < stats.attack_interval {
        return;
    }

    let player_pos = player_transform.translation.truncate();
    let Some(target) = enemy_query.iter().min_by(|a, b| {
        let da = a.translation.truncate().distance_squared(player_pos);
        let db = b.translation.truncate().distance_squared(player_pos);
        da.total_cmp(&db)
    }) else {
        return;
    };

    clock.0.reset();
    let direction = (target.translation.truncate() - player_pos).normalize_or_zero();

    commands.spawn((
        Projectile {
            damage: stats.damage,
        },
        Sprite::from_color(PROJECTILE_COLOR, Vec2::splat(PROJECTILE_RADIUS * 2.0)),
        Transform::from_xyz(player_pos.x, player_pos.y, 4.0),
        RigidBody::Dynamic,
        Collider::ball(PROJECTILE_RADIUS),
        Sensor,
        GravityScale(0.0),
        Velocity::linear(direction * weapon.projectile_speed),
        ActiveEvents::COLLISION_EVENTS,
    ));
}

/// Turn physics collision events into damage and pickups.
fn handle_collisions(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    projectiles: Query<&Projectile>,
    enemies: Query<(), With<Enemy>>,
    shards: Query<&Shard>,
    players: Query<(), With<Player>>,
    mut damage_events: EventWriter<DamageEvent>,
    mut pickup_events: EventWriter<ShardPickupEvent>,
) {
    // A projectile damages at most one enemy, a shard pays out once
    let mut consumed: HashSet<Entity> = HashSet::new();

    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        for (first, second) in [(*a, *b), (*b, *a)] {
            if let Ok(projectile) = projectiles.get(first) {
                if enemies.contains(second) && consumed.insert(first) {
                    damage_events.send(DamageEvent {
                        target: second,
                        source: first,
                        amount: projectile.damage,
                    });
                    commands.entity(first).despawn();
                }
            }

            if let Ok(shard) = shards.get(first) {
                if players.contains(second) && consumed.insert(first) {
                    pickup_events.send(ShardPickupEvent {
                        player: second,
                        xp_value: shard.xp_value,
                    });
                    commands.entity(first).despawn();
                }
            }
        }
    }
}

/// Deal contact damage when an enemy reaches the player.
///
/// Distance-based rather than event-based so an enemy that stays glued to
/// the player keeps hurting them once per cooldown window.
fn contact_damage(
    mut commands: Commands,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<HitCooldown>)>,
    enemy_query: Query<(Entity, &Transform, &EnemyStats, Option<&Elite>), With<Enemy>>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((player_entity, player_transform)) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (enemy_entity, transform, stats, elite) in enemy_query.iter() {
        let radius = if elite.is_some() {
            ENEMY_RADIUS * ELITE_SCALE
        } else {
            ENEMY_RADIUS
        };
        let reach = radius + PLAYER_RADIUS;

        if transform.translation.truncate().distance_squared(player_pos) <= reach * reach {
            damage_events.send(DamageEvent {
                target: player_entity,
                source: enemy_entity,
                amount: stats.damage,
            });
            commands.entity(player_entity).insert(HitCooldown::default());
            break;
        }
    }
}

/// Apply queued damage to health, through the player's defense.
fn apply_damage(
    mut damage_events: EventReader<DamageEvent>,
    mut health_query: Query<(&mut Health, Option<&PlayerStats>)>,
) {
    for event in damage_events.read() {
        if let Ok((mut health, stats)) = health_query.get_mut(event.target) {
            let defense = stats.map_or(0.0, |s| s.defense);
            health.take_damage(effective_damage(event.amount, defense));
        }
    }
}

/// Despawn dead enemies, dropping a shard and awarding score.
fn resolve_enemy_deaths(
    mut commands: Commands,
    shard_config: Res<ShardConfig>,
    query: Query<
        (Entity, &Transform, &Health, &EnemyStats, Option<&Elite>),
        (With<Enemy>, Changed<Health>),
    >,
    mut score_events: EventWriter<ScoreEvent>,
) {
    for (entity, transform, health, stats, elite) in query.iter() {
        if !health.is_dead() {
            continue;
        }

        commands.spawn((
            Shard {
                xp_value: shard_config.xp_value * stats.shard_bonus,
            },
            Sprite::from_color(SHARD_COLOR, Vec2::splat(SHARD_RADIUS * 2.0)),
            Transform::from_xyz(transform.translation.x, transform.translation.y, 1.0),
            RigidBody::Fixed,
            Collider::ball(SHARD_RADIUS),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
        ));
        score_events.send(ScoreEvent {
            amount: if elite.is_some() { 2 } else { 1 },
        });
        commands.entity(entity).despawn_recursive();
    }
}

/// End the run when the player's health reaches zero.
fn check_player_death(
    query: Query<&Health, (With<Player>, Changed<Health>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if let Ok(health) = query.get_single() {
        if health.is_dead() {
            info!("Player died");
            next_state.set(GameState::GameOver);
        }
    }
}

/// Tick invulnerability windows and drop them once they expire.
fn tick_hit_cooldowns(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitCooldown)>,
) {
    for (entity, mut cooldown) in query.iter_mut() {
        cooldown.0.tick(time.delta());
        if cooldown.0.finished() {
            commands.entity(entity).remove::<HitCooldown>();
        }
    }
}

/// Despawn projectiles that have left the spawn ring without hitting
/// anything.
fn despawn_stray_projectiles(
    mut commands: Commands,
    query: Query<(Entity, &Transform), With<Projectile>>,
) {
    let bound = ARENA_SIZE / 2.0 + Vec2::splat(100.0);
    for (entity, transform) in query.iter() {
        let pos = transform.translation.truncate();
        if pos.x.abs() > bound.x || pos.y.abs() > bound.y {
            commands.entity(entity).despawn();
        }
    }
}

/// Remove leftover projectiles when the run ends.
fn cleanup_projectiles(mut commands: Commands, query: Query<Entity, With<Projectile>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
