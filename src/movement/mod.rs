//! Movement domain: the player body, its per-tick physics and input sampling.

mod bootstrap;
mod collisions;
mod components;
mod facing;
mod physics;
mod resources;
mod systems;


pub use components::{Facing, Motion, Player, PlayerBody, Pose};
pub use facing::{classify_facing, facing_angle_deg, facing_toward};
pub use physics::{HorizontalIntent, apply_friction, push_impulse};
pub use resources::{AimTarget, InputSnapshot, MovementTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{read_aim, read_input};

/// Registers the tick inputs and spawns the player.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .init_resource::<AimTarget>()
            .add_systems(Startup, spawn_player);
    }
}

/// Samples keyboard, mouse and cursor into [`InputSnapshot`] and
/// [`AimTarget`]. Needs a window; headless apps leave it out.
pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (read_input, read_aim));
    }
}
