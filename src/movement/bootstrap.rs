//! Movement domain: player bootstrap from gameplay defaults.

use bevy::prelude::*;

use crate::content::GameplayDefaults;
use crate::movement::{Player, PlayerBody};

/// Spawn the single player body. Runs once at startup.
pub(crate) fn spawn_player(
    mut commands: Commands,
    defaults: Res<GameplayDefaults>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let spawn = &defaults.player;
    let body = PlayerBody::new(spawn.position(), spawn.size(), defaults.tuning);

    info!(
        "Spawning player at ({}, {}), size {}x{}, max_speed_x={}, jump_height={:.1}",
        spawn.x,
        spawn.y,
        spawn.width,
        spawn.height,
        defaults.tuning.max_speed_x,
        defaults.tuning.jump_height()
    );

    commands.spawn((Player, body));
}
