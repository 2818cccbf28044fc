//! Duskswarm - Entry Point
//!
//! A top-down survival arcade game: outlast the swarm.
//!
//! Controls:
//! - WASD or gamepad left stick: Move
//! - Firing is automatic, aimed at the nearest enemy

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Duskswarm".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        // Window backdrop behind the letterboxed field
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.06)))
        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
        // Our game plugin
        .add_plugins(duskswarm::DuskswarmPlugin)
        .run();
}
