//! Player module - the controlled character, its stats, and movement.

mod components;
mod data;
mod movement;
mod plugin;

pub use components::*;
pub use data::PlayerDefinition;
pub use plugin::PlayerPlugin;
