//! Simulation domain: one tick of the player against the level.

use bevy::prelude::*;

use crate::level::CollisionWorld;
use crate::movement::{Facing, HorizontalIntent, InputSnapshot, PlayerBody};

/// What changed during one tick, derived by comparing the body before and
/// after the update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickEvents {
    pub landed: bool,
    pub left_ground: bool,
    pub jumped: bool,
    pub pushed: Option<Facing>,
}

/// Advance `body` by one tick and report the transitions it went through.
pub fn step(
    body: &mut PlayerBody,
    input: &InputSnapshot,
    target: Vec2,
    world: &CollisionWorld,
) -> TickEvents {
    let was_on_ground = body.on_ground();
    // A push on the ground restores `can_push` within the same tick.
    let intent = HorizontalIntent::select(input, body.can_push());
    let aimed = body.facing();

    body.update(input, target, world);

    TickEvents {
        landed: !was_on_ground && body.on_ground(),
        left_ground: was_on_ground && !body.on_ground(),
        jumped: input.jump && was_on_ground,
        pushed: (intent == HorizontalIntent::Push).then_some(aimed),
    }
}
