//! Simulation domain: the fixed-tick orchestration of the player body.
//!
//! Each `FixedUpdate` runs [`SimulationSet::Step`] (advance the body, clear
//! edge input, count the tick) followed by [`SimulationSet::Observe`], where
//! read-only observers such as the debug probe sample the settled state.

mod events;
mod step;
mod systems;


pub use events::{PlayerJumped, PlayerLanded, PushSkillUsed};
pub use step::{TickEvents, step};

use bevy::prelude::*;

use crate::content::{GameplayDefaults, WorldConfig};
use crate::level::LevelPlugin;
use crate::movement::MovementPlugin;
use crate::simulation::systems::{advance_tick, clear_edge_input, step_player};

/// Number of completed simulation ticks.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTick(pub u64);

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Step,
    Observe,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let tick_hz = app
            .world()
            .get_resource::<GameplayDefaults>()
            .map(|defaults| defaults.world.tick_hz)
            .unwrap_or(WorldConfig::default().tick_hz);

        app.insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .init_resource::<SimulationTick>()
            .add_message::<PlayerLanded>()
            .add_message::<PlayerJumped>()
            .add_message::<PushSkillUsed>()
            .configure_sets(
                FixedUpdate,
                (SimulationSet::Step, SimulationSet::Observe).chain(),
            )
            .add_systems(
                FixedUpdate,
                (step_player, clear_edge_input, advance_tick)
                    .chain()
                    .in_set(SimulationSet::Step),
            );
    }
}

/// Minimal app for headless simulation: no window, no rendering, no device
/// input. Drive it with `run_schedule(Startup)` once, then
/// `run_schedule(FixedUpdate)` per tick.
pub fn create_headless_app(defaults: GameplayDefaults) -> App {
    let mut app = App::new();
    app.insert_resource(defaults)
        .add_plugins((LevelPlugin, MovementPlugin, SimulationPlugin));

    app
}
