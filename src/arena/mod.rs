//! Arena module - the playing field, camera, and backdrop.

mod plugin;

pub use plugin::{ArenaPlugin, ARENA_SIZE};
