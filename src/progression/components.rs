//! Experience, shards, and level-up growth.

use bevy::prelude::*;

use crate::combat::Health;
use crate::player::PlayerStats;

/// Collision radius of an xp shard in world units.
pub const SHARD_RADIUS: f32 = 6.0;

// Per-level stat growth
const SPEED_GROWTH: f32 = 1.2;
const DEFENSE_GROWTH: f32 = 1.2;
const DAMAGE_GROWTH: f32 = 1.5;
const ATTACK_INTERVAL_GROWTH: f32 = 0.7;
const MAX_HEALTH_GROWTH: f32 = 1.2;
const LEVEL_HEAL: f32 = 50.0;
const REQUIREMENT_GROWTH: f32 = 1.2;

/// An experience shard dropped by a dead enemy.
///
/// The value is baked at drop time (base shard value scaled by the
/// enemy's shard bonus).
#[derive(Component)]
pub struct Shard {
    pub xp_value: f32,
}

/// The player's experience state.
#[derive(Component, Clone, Debug)]
pub struct Experience {
    /// Experience accumulated toward the next level
    pub current: f32,
    /// Current level, starting at 1
    pub level: u32,
    /// Experience required for the next level
    pub to_next: f32,
}

impl Experience {
    pub fn new(to_next: f32) -> Self {
        Self {
            current: 0.0,
            level: 1,
            to_next,
        }
    }

    /// Add experience.
    pub fn grant(&mut self, amount: f32) {
        self.current += amount;
    }

    /// Consume one pending level-up, if any.
    ///
    /// Overflow past the requirement carries into the next level, and the
    /// requirement grows. Returns whether a level was gained; callers loop
    /// until it returns false, so one large pickup can resolve several
    /// levels.
    pub fn try_level_up(&mut self) -> bool {
        if self.current < self.to_next {
            return false;
        }
        self.current -= self.to_next;
        self.to_next *= REQUIREMENT_GROWTH;
        self.level += 1;
        true
    }

    pub fn percentage(&self) -> f32 {
        self.current / self.to_next
    }
}

/// Apply one level worth of stat growth.
///
/// Faster, tougher, harder-hitting, quicker firing; max health grows and
/// the level-up heals, clamped to the new maximum.
pub fn apply_level_growth(stats: &mut PlayerStats, health: &mut Health) {
    stats.move_speed *= SPEED_GROWTH;
    stats.defense *= DEFENSE_GROWTH;
    stats.damage *= DAMAGE_GROWTH;
    stats.attack_interval *= ATTACK_INTERVAL_GROWTH;

    health.maximum *= MAX_HEALTH_GROWTH;
    health.current = (health.current + LEVEL_HEAL).min(health.maximum);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_stats() -> PlayerStats {
        PlayerStats {
            move_speed: 100.0,
            defense: 1.0,
            damage: 10.0,
            attack_interval: 1.0,
            luck: 0.0,
            xp_modifier: 1.0,
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn no_level_below_requirement() {
        let mut exp = Experience::new(100.0);
        exp.grant(99.0);
        assert!(!exp.try_level_up());
        assert_eq!(exp.level, 1);
        assert_eq!(exp.current, 99.0);
    }

    #[test]
    fn overflow_carries_into_next_level() {
        let mut exp = Experience::new(100.0);
        exp.grant(130.0);
        assert!(exp.try_level_up());
        assert!(!exp.try_level_up());
        assert_eq!(exp.level, 2);
        assert_eq!(exp.current, 30.0);
        assert_close(exp.to_next, 120.0);
    }

    #[test]
    fn one_pickup_can_resolve_several_levels() {
        let mut exp = Experience::new(100.0);
        exp.grant(250.0);
        let mut gained = 0;
        while exp.try_level_up() {
            gained += 1;
        }
        // 100 then 120; 250 covers both with 30 left over
        assert_eq!(gained, 2);
        assert_eq!(exp.level, 3);
        assert_close(exp.current, 30.0);
    }

    #[test]
    fn growth_multiplies_stats() {
        let mut stats = base_stats();
        let mut health = Health::new(100.0);
        health.current = 40.0;

        apply_level_growth(&mut stats, &mut health);

        assert_close(stats.move_speed, 120.0);
        assert_close(stats.defense, 1.2);
        assert_eq!(stats.damage, 15.0);
        assert_close(stats.attack_interval, 0.7);
        assert_close(health.maximum, 120.0);
        assert_eq!(health.current, 90.0);
    }

    #[test]
    fn level_heal_clamps_to_new_maximum() {
        let mut stats = base_stats();
        let mut health = Health::new(100.0);
        health.current = 95.0;

        apply_level_growth(&mut stats, &mut health);

        // 95 + 50 would exceed the grown maximum of 120
        assert_close(health.current, 120.0);
        assert_eq!(health.current, health.maximum);
    }
}
