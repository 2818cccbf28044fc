//! In-game HUD - health bar, xp bar, score, and level readout.

use bevy::prelude::*;

use crate::combat::Health;
use crate::core::{GameState, ScoreEvent};
use crate::player::Player;
use crate::progression::Experience;

/// Kills counted this run.
#[derive(Resource, Default)]
pub struct Score(pub u32);

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the health bar fill.
#[derive(Component)]
struct HealthBar;

/// Marker for the xp bar fill.
#[derive(Component)]
struct XpBar;

/// Marker for the score text.
#[derive(Component)]
struct ScoreText;

/// Marker for the level text.
#[derive(Component)]
struct LevelText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.init_resource::<Score>()
        .add_systems(OnEnter(GameState::InGame), (reset_score, spawn_hud))
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_health_bar, update_xp_bar, update_score, update_level)
                .run_if(in_state(GameState::InGame)),
        );
}

/// A fresh run starts from zero.
fn reset_score(mut score: ResMut<Score>) {
    score.0 = 0;
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Status bars (bottom-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, "Health", Color::srgb(0.8, 0.2, 0.2), HealthBar);
            spawn_bar(parent, "XP", Color::srgb(0.24, 0.86, 0.71), XpBar);
        });

    // Score and level (top-right corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::End,
                padding: UiRect::all(Val::Px(10.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                ScoreText,
            ));
            parent.spawn((
                Text::new("Lv 1"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
                LevelText,
            ));
        });
}

/// Helper to spawn a labeled status bar.
fn spawn_bar<M: Component>(parent: &mut ChildBuilder, label: &str, color: Color, marker: M) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            bar_parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));

            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(150.0),
                        height: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(color),
                        marker,
                    ));
                });
        });
}

/// Update the health bar from the player's health.
fn update_health_bar(
    player_query: Query<&Health, With<Player>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
) {
    let Ok(health) = player_query.get_single() else {
        return;
    };
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    bar.width = Val::Percent(health.percentage().clamp(0.0, 1.0) * 100.0);
}

/// Update the xp bar from progress toward the next level.
fn update_xp_bar(
    player_query: Query<&Experience, With<Player>>,
    mut bar_query: Query<&mut Node, With<XpBar>>,
) {
    let Ok(experience) = player_query.get_single() else {
        return;
    };
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    bar.width = Val::Percent(experience.percentage().clamp(0.0, 1.0) * 100.0);
}

/// Count kills and refresh the score text.
fn update_score(
    mut score: ResMut<Score>,
    mut score_events: EventReader<ScoreEvent>,
    mut text_query: Query<&mut Text, With<ScoreText>>,
) {
    let mut changed = false;
    for event in score_events.read() {
        score.0 += event.amount;
        changed = true;
    }

    if changed {
        if let Ok(mut text) = text_query.get_single_mut() {
            text.0 = format!("Score: {}", score.0);
        }
    }
}

/// Refresh the level text when the player levels up.
fn update_level(
    player_query: Query<&Experience, (With<Player>, Changed<Experience>)>,
    mut text_query: Query<&mut Text, With<LevelText>>,
) {
    let Ok(experience) = player_query.get_single() else {
        return;
    };
    if let Ok(mut text) = text_query.get_single_mut() {
        text.0 = format!("Lv {}", experience.level);
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
