use bevy::prelude::*;

mod camera;
mod constants;
mod math_utils;
mod selection;
mod setup;
mod types;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "RTS Unit Select".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((selection::SelectionPlugin, selection::SelectionVisualsPlugin))
        .add_systems(Startup, (setup::setup_scene, setup::spawn_units))
        .add_systems(Update, camera::rts_camera_movement.before(selection::SelectionSet::Toggle))
        .run();
}
