//! Debug tooling for tuning the movement feel.
//!
//! Features:
//! - Sample one body value (velocity, position or aim angle) every N ticks
//! - Periodic min/max/latest summary in the log
//! - F3 cycles the sampled value

mod state;
mod systems;


pub use state::{ProbeSample, ValueProbe};

use bevy::prelude::*;

use crate::content::GameplayDefaults;
use crate::debug::systems::{handle_probe_hotkeys, sample_probe};
use crate::simulation::SimulationSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<GameplayDefaults>()
            .map(|defaults| defaults.probe)
            .unwrap_or_default();

        app.insert_resource(ValueProbe::new(config))
            .add_systems(FixedUpdate, sample_probe.in_set(SimulationSet::Observe))
            .add_systems(Update, handle_probe_hotkeys);
    }
}
