use bevy::prelude::*;

use push_platformer::content::ContentPlugin;
use push_platformer::level::LevelPlugin;
use push_platformer::movement::{MovementPlugin, PlayerInputPlugin};
use push_platformer::simulation::SimulationPlugin;
use push_platformer::view::ViewPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Push Platformer".to_string(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    // Content first: later plugins read GameplayDefaults while building.
    .add_plugins(ContentPlugin::default())
    .add_plugins((
        LevelPlugin,
        MovementPlugin,
        PlayerInputPlugin,
        SimulationPlugin,
        ViewPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(push_platformer::debug::DebugPlugin);

    app.run();
}
