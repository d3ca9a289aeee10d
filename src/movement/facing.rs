//! Movement domain: discrete facing from a continuous aim angle.

use bevy::prelude::*;

use crate::movement::components::Facing;

/// Aim angle in degrees, `[0, 360)`, counter-clockwise from +x with world y
/// pointing down (so a target straight above the anchor is 90°).
///
/// A zero-length aim vector has no direction; it is reported as 0° (East).
pub fn facing_angle_deg(anchor: Vec2, target: Vec2) -> f32 {
    let delta = target - anchor;
    if delta == Vec2::ZERO {
        return 0.0;
    }

    let degrees = (-delta.y).atan2(delta.x).to_degrees();
    (degrees + 360.0) % 360.0
}

/// Bucket an angle into a cardinal direction using half-open intervals.
pub fn classify_facing(angle_deg: f32) -> Facing {
    if (45.0..135.0).contains(&angle_deg) {
        Facing::North
    } else if (135.0..225.0).contains(&angle_deg) {
        Facing::West
    } else if (225.0..315.0).contains(&angle_deg) {
        Facing::South
    } else {
        Facing::East
    }
}

pub fn facing_toward(anchor: Vec2, target: Vec2) -> (f32, Facing) {
    let angle = facing_angle_deg(anchor, target);
    (angle, classify_facing(angle))
}
