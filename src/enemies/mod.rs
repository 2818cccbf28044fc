//! Enemies module - enemy data, spawning, and pursuit.

mod components;
mod data;
mod plugin;
mod pursuit;
mod spawning;

pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use plugin::EnemyPlugin;
