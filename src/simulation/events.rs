//! Simulation domain: messages emitted by the fixed tick.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Facing;

/// The body touched ground this tick after being airborne.
#[derive(Debug, Clone, Copy)]
pub struct PlayerLanded {
    pub position: Vec2,
}

impl Message for PlayerLanded {}

#[derive(Debug, Clone, Copy)]
pub struct PlayerJumped {
    pub position: Vec2,
}

impl Message for PlayerJumped {}

/// The push skill fired; `facing` is the direction it was aimed.
#[derive(Debug, Clone, Copy)]
pub struct PushSkillUsed {
    pub facing: Facing,
    pub velocity: Vec2,
}

impl Message for PushSkillUsed {}
