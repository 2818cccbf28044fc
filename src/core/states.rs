//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Gameplay systems
//! only run in the InGame state, menu systems only in their own states.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Loading` to read the data files
/// - Move to `MainMenu` once loading completes
/// - Enter `InGame` when the player presses Play
/// - `GameOver` when the player dies; Retry re-enters `InGame`
///
/// Every gameplay entity is despawned on leaving `InGame`, so re-entering
/// always starts a fresh run with stats rebuilt from the loaded definitions.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Main menu / title screen
    MainMenu,
    /// Active gameplay
    InGame,
    /// Player has died
    GameOver,
}
