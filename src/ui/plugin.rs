//! UI plugin - menus, HUD, and interface elements.

use bevy::prelude::*;

use super::hud::{self, Score};
use crate::core::GameState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(
                Update,
                menu_button_input.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(
                Update,
                menu_button_input.run_if(in_state(GameState::GameOver)),
            )
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over);
    }
}

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

/// Marker for menu buttons.
#[derive(Component)]
enum MenuButton {
    Play,
    Quit,
    Retry,
    MainMenu,
}

/// Set up the main menu.
fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.08)),
            MainMenuUi,
        ))
        .with_children(|parent| {
            // Title
            parent.spawn((
                Text::new("DUSKSWARM"),
                TextFont {
                    font_size: 80.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.75, 0.55)),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            // Subtitle
            parent.spawn((
                Text::new("Outlast the swarm"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.55)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            spawn_menu_button(parent, "Play", MenuButton::Play);
            spawn_menu_button(parent, "Quit", MenuButton::Quit);
        });
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.15, 0.15, 0.2)),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Handle button interactions for both menus.
fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = Color::srgb(0.3, 0.3, 0.35).into();
                match button {
                    MenuButton::Play | MenuButton::Retry => {
                        next_state.set(GameState::InGame);
                    }
                    MenuButton::MainMenu => {
                        next_state.set(GameState::MainMenu);
                    }
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => {
                *bg_color = Color::srgb(0.25, 0.25, 0.3).into();
            }
            Interaction::None => {
                *bg_color = Color::srgb(0.15, 0.15, 0.2).into();
            }
        }
    }
}

/// Clean up main menu entities.
fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Set up the game over screen with the final score.
fn setup_game_over(mut commands: Commands, score: Res<Score>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.0, 0.0, 0.9)),
            GameOverUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.2, 0.2)),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("Score: {}", score.0)),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));

            spawn_menu_button(parent, "Retry", MenuButton::Retry);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}

/// Clean up game over entities.
fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
