//! Enemy definitions and spawn cadence loaded from RON files.

use std::collections::HashMap;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use super::components::EnemyStats;
use crate::core::load_ron;

/// Enemy definition loaded from one RON file under assets/data/enemies/.
///
/// The defaults double as the built-in fallback enemy.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyDefinition {
    pub name: String,
    pub move_speed: f32,
    pub damage: f32,
    pub max_health: f32,
    pub shard_bonus: f32,
    /// Percent chance (0-100) that a spawn of this type is elite
    pub elite_probability: f32,
    /// Multiplier applied to stats for elite spawns
    pub elite_multiplier: f32,
}

impl Default for EnemyDefinition {
    fn default() -> Self {
        Self {
            name: "Chaser".to_string(),
            move_speed: 50.0,
            damage: 9.0,
            max_health: 10.0,
            shard_bonus: 1.0,
            elite_probability: 10.0,
            elite_multiplier: 2.0,
        }
    }
}

impl EnemyDefinition {
    /// Convert to the runtime stats component.
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            move_speed: self.move_speed,
            damage: self.damage,
            shard_bonus: self.shard_bonus,
        }
    }

    /// The elite variant: combat stats and reward scaled by the
    /// configured multiplier.
    pub fn elite(&self) -> EnemyDefinition {
        EnemyDefinition {
            move_speed: self.move_speed * self.elite_multiplier,
            damage: self.damage * self.elite_multiplier,
            max_health: self.max_health * self.elite_multiplier,
            shard_bonus: self.shard_bonus * self.elite_multiplier,
            ..self.clone()
        }
    }
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource, Default)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

/// Spawn cadence loaded from assets/data/spawner.ron.
#[derive(Resource, Deserialize, Clone, Debug)]
pub struct SpawnerConfig {
    /// Milliseconds between enemy spawns
    pub interval_ms: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self { interval_ms: 800.0 }
    }
}

/// Load every enemy definition from assets/data/enemies/.
///
/// A missing or empty directory falls back to the built-in default enemy
/// so the game still runs.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    let enemies_dir = Path::new("assets/data/enemies");

    if let Ok(entries) = std::fs::read_dir(enemies_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }

            let enemy_type = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            match load_ron::<EnemyDefinition>(&path) {
                Ok(definition) => {
                    info!("Loaded enemy definition: {} ({enemy_type})", definition.name);
                    registry.definitions.insert(enemy_type, definition);
                }
                Err(e) => error!("Skipping enemy definition: {e}"),
            }
        }
    } else {
        warn!("Enemy definitions directory not found: {enemies_dir:?}");
    }

    if registry.definitions.is_empty() {
        let fallback = EnemyDefinition::default();
        warn!("No enemy definitions loaded, using built-in {}", fallback.name);
        registry.definitions.insert("chaser".to_string(), fallback);
    }
}

/// Load the spawn cadence, keeping the defaults on failure.
pub fn load_spawner_config(mut config: ResMut<SpawnerConfig>) {
    match load_ron::<SpawnerConfig>("assets/data/spawner.ron") {
        Ok(loaded) => *config = loaded,
        Err(e) => warn!("Using default spawn cadence: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_chaser_file_parses() {
        let def: EnemyDefinition =
            ron::from_str(include_str!("../../assets/data/enemies/chaser.ron")).unwrap();
        assert_eq!(def.max_health, 10.0);
        assert_eq!(def.elite_multiplier, 2.0);
    }

    #[test]
    fn shipped_spawner_file_parses() {
        let config: SpawnerConfig =
            ron::from_str(include_str!("../../assets/data/spawner.ron")).unwrap();
        assert_eq!(config.interval_ms, 800.0);
    }

    /// Elite scaling multiplies combat stats and reward, nothing else.
    #[test]
    fn elite_variant_scales_stats() {
        let base = EnemyDefinition::default();
        let elite = base.elite();

        assert_eq!(elite.move_speed, base.move_speed * 2.0);
        assert_eq!(elite.damage, base.damage * 2.0);
        assert_eq!(elite.max_health, base.max_health * 2.0);
        assert_eq!(elite.shard_bonus, base.shard_bonus * 2.0);
        assert_eq!(elite.elite_probability, base.elite_probability);
        assert_eq!(elite.name, base.name);
    }
}
