//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tick movement constants. Velocities are in world units per tick.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed_x: f32,
    pub gravity: f32,
    /// Negative: up is -y in world space.
    pub jump_power: f32,
    pub push_power: f32,
    pub acceleration: f32,
    pub friction: f32,
    /// Horizontal speed above which the body shows the moving pose.
    pub move_pose_threshold: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed_x: 6.0,
            gravity: 0.5,
            jump_power: -12.0,
            push_power: 10.0,
            acceleration: 0.5,
            friction: 0.5,
            move_pose_threshold: 0.5,
        }
    }
}

impl MovementTuning {
    /// Apex height of a standing jump: v² / (2g).
    pub fn jump_height(&self) -> f32 {
        self.jump_power * self.jump_power / (2.0 * self.gravity)
    }
}

/// Buttons held (or pressed, for `push`) during one tick.
///
/// `push` is edge-triggered: it is latched by input sampling and cleared
/// once a tick has consumed it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub push: bool,
}

/// Pointer position in world coordinates, used to aim the facing direction.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct AimTarget(pub Vec2);
