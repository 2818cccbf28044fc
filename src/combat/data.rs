//! Weapon tuning loaded from assets/data/weapon.ron.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::load_ron;

/// Weapon tuning for the auto-fire projectile.
#[derive(Resource, Deserialize, Clone, Debug)]
pub struct WeaponConfig {
    /// Projectile speed in units per second
    pub projectile_speed: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            projectile_speed: 400.0,
        }
    }
}

/// Load the weapon tuning, keeping the defaults on failure.
pub fn load_weapon_config(mut config: ResMut<WeaponConfig>) {
    match load_ron::<WeaponConfig>("assets/data/weapon.ron") {
        Ok(loaded) => *config = loaded,
        Err(e) => warn!("Using default weapon tuning: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_weapon_file_parses() {
        let config: WeaponConfig =
            ron::from_str(include_str!("../../assets/data/weapon.ron")).unwrap();
        assert_eq!(config.projectile_speed, 400.0);
    }
}
