//! Simulation domain: fixed-tick systems.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::level::CollisionWorld;
use crate::movement::{AimTarget, InputSnapshot, Player, PlayerBody};
use crate::simulation::events::{PlayerJumped, PlayerLanded, PushSkillUsed};
use crate::simulation::step::step;
use crate::simulation::SimulationTick;

pub(crate) fn step_player(
    input: Res<InputSnapshot>,
    aim: Res<AimTarget>,
    world: Res<CollisionWorld>,
    mut players: Query<&mut PlayerBody, With<Player>>,
    mut landed_events: MessageWriter<PlayerLanded>,
    mut jumped_events: MessageWriter<PlayerJumped>,
    mut push_events: MessageWriter<PushSkillUsed>,
) {
    for mut body in &mut players {
        let events = step(&mut body, &input, aim.0, &world);

        if events.jumped {
            debug!("Jump: vy={}", body.velocity().y);
            jumped_events.write(PlayerJumped {
                position: body.position(),
            });
        }

        if let Some(facing) = events.pushed {
            debug!("Push used toward {:?}: velocity={:?}", facing, body.velocity());
            push_events.write(PushSkillUsed {
                facing,
                velocity: body.velocity(),
            });
        }

        if events.landed {
            debug!("Landed at {:?}, push restored", body.position());
            landed_events.write(PlayerLanded {
                position: body.position(),
            });
        } else if events.left_ground {
            debug!("Left ground at {:?}", body.position());
        }
    }
}

/// Drop edge-triggered input once a tick has seen it.
pub(crate) fn clear_edge_input(mut input: ResMut<InputSnapshot>) {
    input.push = false;
}

pub(crate) fn advance_tick(mut tick: ResMut<SimulationTick>) {
    tick.0 += 1;
}
