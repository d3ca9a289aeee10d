//! Movement domain: the fixed-tick update of the player body.
//!
//! The order of the phases in [`PlayerBody::update`] is observable: moving a
//! phase changes where the body ends up and which flags are set.

use bevy::prelude::*;

use crate::level::CollisionWorld;
use crate::movement::collisions::{
    apply_floor_fallback, clamp_to_world_edges, resolve_platform_collisions,
};
use crate::movement::components::{Facing, PlayerBody};
use crate::movement::facing::facing_toward;
use crate::movement::resources::InputSnapshot;

/// Horizontal action for one tick. Exactly one is chosen, by precedence
/// left > right > push > coast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalIntent {
    MoveLeft,
    MoveRight,
    Push,
    Coast,
}

impl HorizontalIntent {
    /// Push is only reachable with neither direction held.
    pub fn select(input: &InputSnapshot, can_push: bool) -> Self {
        if input.left {
            Self::MoveLeft
        } else if input.right {
            Self::MoveRight
        } else if input.push && can_push {
            Self::Push
        } else {
            Self::Coast
        }
    }
}

/// Velocity change applied by the push skill. The body recoils away from
/// where it is aiming.
pub fn push_impulse(facing: Facing, velocity: Vec2, push_power: f32) -> Vec2 {
    match facing {
        Facing::North => Vec2::new(velocity.x, push_power),
        Facing::South => Vec2::new(velocity.x, -push_power),
        Facing::East => Vec2::new(-push_power, velocity.y),
        Facing::West => Vec2::new(push_power, velocity.y),
    }
}

/// Move `vx` toward zero by `friction`, stopping at zero.
pub fn apply_friction(vx: f32, friction: f32) -> f32 {
    if vx > 0.0 {
        (vx - friction).max(0.0)
    } else if vx < 0.0 {
        (vx + friction).min(0.0)
    } else {
        vx
    }
}

impl PlayerBody {
    /// Advance the body by one tick.
    pub fn update(&mut self, input: &InputSnapshot, target: Vec2, world: &CollisionWorld) {
        self.apply_horizontal_intent(input);
        self.velocity.x = self
            .velocity
            .x
            .clamp(-self.tuning.max_speed_x, self.tuning.max_speed_x);

        if input.jump && self.on_ground {
            self.jump();
        }

        self.position.x += self.velocity.x;

        self.velocity.y += self.tuning.gravity;
        let old_bottom = self.bottom();
        self.position.y += self.velocity.y;

        resolve_platform_collisions(self, world, old_bottom);

        let bounds = world.bounds();
        apply_floor_fallback(self, bounds);
        clamp_to_world_edges(self, bounds);

        self.update_facing(target);
    }

    fn apply_horizontal_intent(&mut self, input: &InputSnapshot) {
        match HorizontalIntent::select(input, self.can_push) {
            HorizontalIntent::MoveLeft => {
                self.velocity.x -= self.tuning.acceleration;
                self.facing_right = false;
            }
            HorizontalIntent::MoveRight => {
                self.velocity.x += self.tuning.acceleration;
                self.facing_right = true;
            }
            HorizontalIntent::Push => {
                self.can_push = false;
                self.velocity = push_impulse(self.facing, self.velocity, self.tuning.push_power);
            }
            HorizontalIntent::Coast => {
                self.velocity.x = apply_friction(self.velocity.x, self.tuning.friction);
            }
        }
    }

    fn jump(&mut self) {
        self.velocity.y = self.tuning.jump_power;
        self.is_jumping = true;
        self.on_ground = false;
    }

    fn update_facing(&mut self, target: Vec2) {
        let (angle, facing) = facing_toward(self.position, target);
        if facing != self.facing {
            trace!("Facing {:?} -> {:?} ({:.1} deg)", self.facing, facing, angle);
        }
        self.facing_angle_deg = angle;
        self.facing = facing;
    }
}
