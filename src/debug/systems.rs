//! Debug domain: probe sampling and hotkeys.

use bevy::prelude::*;

use crate::debug::state::ValueProbe;
use crate::movement::{Player, PlayerBody};
use crate::simulation::SimulationTick;

/// Read the probed value after the tick has settled. Never writes the body.
pub(crate) fn sample_probe(
    tick: Res<SimulationTick>,
    players: Query<&PlayerBody, With<Player>>,
    mut probe: ResMut<ValueProbe>,
) {
    if !probe.should_sample(tick.0) {
        return;
    }
    let Ok(body) = players.single() else {
        return;
    };

    let value = probe.source().read(body);
    probe.record(tick.0, value);

    if probe.take_report_due() {
        debug!(
            "[PROBE] {:?}: latest={:?} min={:?} max={:?} over {} samples",
            probe.source(),
            probe.latest().map(|s| s.value),
            probe.min(),
            probe.max(),
            probe.len()
        );
    }
}

/// F3 cycles the probed value.
pub(crate) fn handle_probe_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut probe: ResMut<ValueProbe>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        let source = probe.cycle_source();
        info!("[DEBUG] Probe now sampling {:?}", source);
    }
}
