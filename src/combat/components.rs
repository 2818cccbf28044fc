//! Combat-related components.

use bevy::prelude::*;

// Re-export from core to avoid duplication
pub use crate::core::DamageEvent;

/// Collision radius of a projectile in world units.
pub const PROJECTILE_RADIUS: f32 = 4.0;

/// Seconds of invulnerability after the player is hit by contact damage.
pub const HIT_COOLDOWN_SECS: f32 = 0.5;

/// Component for entities that can take damage.
#[derive(Component, Clone, Debug)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        self.current / self.maximum
    }
}

/// A fired projectile, carrying the player's damage at fire time.
#[derive(Component)]
pub struct Projectile {
    pub damage: f32,
}

/// Invulnerability window after taking contact damage.
#[derive(Component)]
pub struct HitCooldown(pub Timer);

impl Default for HitCooldown {
    fn default() -> Self {
        Self(Timer::from_seconds(HIT_COOLDOWN_SECS, TimerMode::Once))
    }
}

/// Flat damage reduction, floored at zero.
pub fn effective_damage(amount: f32, defense: f32) -> f32 {
    (amount - defense).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut health = Health::new(10.0);
        assert_eq!(health.take_damage(4.0), 4.0);
        assert_eq!(health.current, 6.0);
        assert_eq!(health.take_damage(100.0), 6.0);
        assert_eq!(health.current, 0.0);
        assert!(health.is_dead());
    }

    #[test]
    fn heal_clamps_at_maximum() {
        let mut health = Health::new(100.0);
        health.take_damage(30.0);
        assert_eq!(health.heal(50.0), 30.0);
        assert_eq!(health.current, 100.0);
    }

    #[test]
    fn defense_reduces_damage_with_floor() {
        assert_eq!(effective_damage(9.0, 1.0), 8.0);
        assert_eq!(effective_damage(1.0, 5.0), 0.0);
        assert_eq!(effective_damage(10.0, 0.0), 10.0);
    }
}
