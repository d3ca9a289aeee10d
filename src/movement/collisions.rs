//! Movement domain: resolving the body against platforms and world bounds.

use crate::level::{CollisionWorld, WorldBounds};
use crate::movement::components::PlayerBody;

/// Snap the body out of every platform it overlaps after integration.
///
/// Candidates are collected against the post-integration rectangle and
/// visited in insertion order. Each candidate may trigger a vertical
/// correction (landing or ceiling) and, independently, a horizontal one;
/// the conditions are evaluated against the body as already corrected by
/// earlier candidates.
pub(crate) fn resolve_platform_collisions(
    body: &mut PlayerBody,
    world: &CollisionWorld,
    old_bottom: f32,
) {
    body.on_ground = false;

    for platform in world.platforms_overlapping(body.rect()) {
        let rect = platform.rect();

        if body.velocity.y > 0.0 && old_bottom <= rect.top() && rect.top() < body.bottom() {
            body.set_bottom(rect.top());
            body.land();
        } else if body.velocity.y < 0.0
            && body.top() <= rect.bottom()
            && rect.bottom() < body.top() - body.velocity.y
        {
            body.set_top(rect.bottom());
            body.velocity.y = 0.0;
        }

        // Not exclusive with the vertical branch above.
        if body.velocity.x > 0.0 && body.right() > rect.left() && body.left() < rect.left() {
            body.set_right(rect.left());
            body.velocity.x = 0.0;
        } else if body.velocity.x < 0.0
            && body.left() < rect.right()
            && body.right() > rect.right()
        {
            body.set_left(rect.right());
            body.velocity.x = 0.0;
        }
    }
}

/// The bottom edge of the world acts as ground when no platform caught the body.
pub(crate) fn apply_floor_fallback(body: &mut PlayerBody, bounds: WorldBounds) {
    if body.bottom() > bounds.height {
        body.set_bottom(bounds.height);
        body.land();
    }
}

pub(crate) fn clamp_to_world_edges(body: &mut PlayerBody, bounds: WorldBounds) {
    if body.left() < 0.0 {
        body.set_left(0.0);
        body.velocity.x = 0.0;
    }
    if body.right() > bounds.width {
        body.set_right(bounds.width);
        body.velocity.x = 0.0;
    }
    if body.top() < 0.0 {
        body.set_top(0.0);
        body.velocity.y = 0.0;
    }
}
