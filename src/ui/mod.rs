//! UI module - menus and the in-game HUD.

mod hud;
mod plugin;

pub use hud::Score;
pub use plugin::UiPlugin;
