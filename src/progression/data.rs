//! Shard tuning loaded from assets/data/shard.ron.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::load_ron;

/// Base experience value of a dropped shard, before the enemy's shard
/// bonus and the player's xp modifier.
#[derive(Resource, Deserialize, Clone, Debug)]
pub struct ShardConfig {
    pub xp_value: f32,
}

impl Default for ShardConfig {
    fn default() -> Self {
        Self { xp_value: 25.0 }
    }
}

/// Load the shard tuning, keeping the defaults on failure.
pub fn load_shard_config(mut config: ResMut<ShardConfig>) {
    match load_ron::<ShardConfig>("assets/data/shard.ron") {
        Ok(loaded) => *config = loaded,
        Err(e) => warn!("Using default shard tuning: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_shard_file_parses() {
        let config: ShardConfig =
            ron::from_str(include_str!("../../assets/data/shard.ron")).unwrap();
        assert_eq!(config.xp_value, 25.0);
    }
}
