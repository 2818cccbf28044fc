//! Core plugin that sets up game states and global events.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, MainMenu, InGame, GameOver)
/// - Global events (DamageEvent, ShardPickupEvent, ScoreEvent)
/// - The Loading -> MainMenu handoff once the data loaders have run
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<ShardPickupEvent>()
            .add_event::<ScoreEvent>()
            // Data loaders run in OnEnter(Loading); by the first Update
            // pass everything is in place
            .add_systems(
                Update,
                finish_loading.run_if(in_state(GameState::Loading)),
            );
    }
}

/// Transition from Loading to MainMenu.
///
/// The per-module loader systems all run during OnEnter(Loading), so the
/// first Update frame in this state means the registries are populated.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}
