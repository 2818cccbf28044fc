//! Player stat table loaded from assets/data/player.ron.

use bevy::prelude::*;
use serde::Deserialize;

use super::components::PlayerStats;
use crate::core::load_ron;

/// Player base stats loaded from the data file.
///
/// The defaults double as the fallback when the file is missing or broken.
#[derive(Resource, Deserialize, Clone, Debug)]
pub struct PlayerDefinition {
    pub move_speed: f32,
    pub defense: f32,
    pub damage: f32,
    pub attack_interval_ms: f32,
    pub max_health: f32,
    pub luck: f32,
    pub xp_modifier: f32,
    pub level_up_requirement: f32,
}

impl Default for PlayerDefinition {
    fn default() -> Self {
        Self {
            move_speed: 100.0,
            defense: 1.0,
            damage: 10.0,
            attack_interval_ms: 1000.0,
            max_health: 100.0,
            luck: 0.0,
            xp_modifier: 1.0,
            level_up_requirement: 100.0,
        }
    }
}

impl PlayerDefinition {
    /// Convert to the runtime stats component.
    pub fn to_stats(&self) -> PlayerStats {
        PlayerStats {
            move_speed: self.move_speed,
            defense: self.defense,
            damage: self.damage,
            attack_interval: self.attack_interval_ms / 1000.0,
            luck: self.luck,
            xp_modifier: self.xp_modifier,
        }
    }
}

/// Load the player definition, keeping the defaults on failure.
pub fn load_player_definition(mut definition: ResMut<PlayerDefinition>) {
    match load_ron::<PlayerDefinition>("assets/data/player.ron") {
        Ok(loaded) => {
            info!("Loaded player definition");
            *definition = loaded;
        }
        Err(e) => {
            warn!("Using default player stats: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The shipped data file must stay parseable and in sync with the
    /// struct.
    #[test]
    fn shipped_player_file_parses() {
        let def: PlayerDefinition =
            ron::from_str(include_str!("../../assets/data/player.ron")).unwrap();
        assert_eq!(def.max_health, 100.0);
        assert_eq!(def.attack_interval_ms, 1000.0);
    }

    #[test]
    fn stats_convert_interval_to_seconds() {
        let stats = PlayerDefinition::default().to_stats();
        assert_eq!(stats.attack_interval, 1.0);
        assert_eq!(stats.move_speed, 100.0);
    }
}
