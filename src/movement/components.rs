//! Movement domain: the player body and its derived presentation state.

use bevy::prelude::*;

use crate::level::Aabb;
use crate::movement::resources::MovementTuning;

#[derive(Component, Debug)]
pub struct Player;

/// Cardinal aim direction derived from the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Motion {
    #[default]
    Idle,
    Move,
}

/// Sprite pose for renderers: which image, and whether to mirror it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pose {
    pub motion: Motion,
    pub mirrored: bool,
}

/// Kinematic state of the player.
///
/// `position` is the top-left corner of the bounding box in world space
/// (y grows downward). Mutated only through [`PlayerBody::update`].
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlayerBody {
    pub(crate) position: Vec2,
    pub(crate) size: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) tuning: MovementTuning,
    pub(crate) facing_right: bool,
    pub(crate) on_ground: bool,
    /// Sticky: cleared by using the push, restored only by landing.
    pub(crate) can_push: bool,
    pub(crate) is_jumping: bool,
    pub(crate) facing_angle_deg: f32,
    pub(crate) facing: Facing,
}

impl PlayerBody {
    pub fn new(position: Vec2, size: Vec2, tuning: MovementTuning) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            tuning,
            facing_right: true,
            on_ground: false,
            can_push: true,
            is_jumping: false,
            facing_angle_deg: 0.0,
            facing: Facing::North,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn can_push(&self) -> bool {
        self.can_push
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn facing_angle_deg(&self) -> f32 {
        self.facing_angle_deg
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn pose(&self) -> Pose {
        let motion = if self.velocity.x.abs() > self.tuning.move_pose_threshold {
            Motion::Move
        } else {
            Motion::Idle
        };

        Pose {
            motion,
            mirrored: !self.facing_right,
        }
    }

    pub(crate) fn left(&self) -> f32 {
        self.position.x
    }

    pub(crate) fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub(crate) fn top(&self) -> f32 {
        self.position.y
    }

    pub(crate) fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub(crate) fn set_left(&mut self, left: f32) {
        self.position.x = left;
    }

    pub(crate) fn set_right(&mut self, right: f32) {
        self.position.x = right - self.size.x;
    }

    pub(crate) fn set_top(&mut self, top: f32) {
        self.position.y = top;
    }

    pub(crate) fn set_bottom(&mut self, bottom: f32) {
        self.position.y = bottom - self.size.y;
    }

    /// Ground contact confirmed this tick (platform or floor).
    pub(crate) fn land(&mut self) {
        self.velocity.y = 0.0;
        self.on_ground = true;
        self.can_push = true;
        self.is_jumping = false;
    }
}
