//! Combat module - auto-fire, projectiles, damage, and deaths.

mod components;
mod data;
mod plugin;
mod systems;

pub use components::*;
pub use data::WeaponConfig;
pub use plugin::CombatPlugin;
