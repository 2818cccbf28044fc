//! Progression module - experience shards, leveling, and stat growth.

mod components;
mod data;
mod plugin;
mod systems;

pub use components::*;
pub use data::ShardConfig;
pub use plugin::ProgressionPlugin;
