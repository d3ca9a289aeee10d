//! Level domain: the collision world queried by the player every tick.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::level::data::Platform;
use crate::level::geometry::Aabb;

/// Playable area. The body is clamped to `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a world point to display space (origin at the world's center, y up).
    pub fn world_to_display(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    /// Inverse of [`WorldBounds::world_to_display`].
    pub fn display_to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }
}

/// Ordered set of platforms plus the world bounds.
///
/// Insertion order is significant: when the body overlaps several platforms
/// in one tick, corrections are applied in that order. The world is only
/// changed between ticks, by whoever loads levels.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CollisionWorld {
    bounds: WorldBounds,
    platforms: Vec<Platform>,
}

impl CollisionWorld {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            platforms: Vec::new(),
        }
    }

    pub fn with_platforms(bounds: WorldBounds, platforms: Vec<Platform>) -> Self {
        Self { bounds, platforms }
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn push(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    /// Removes the platform at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Platform> {
        (index < self.platforms.len()).then(|| self.platforms.remove(index))
    }

    pub fn clear(&mut self) {
        self.platforms.clear();
    }

    /// Swap the whole level at once, e.g. on level load.
    pub fn replace_platforms(&mut self, platforms: Vec<Platform>) {
        self.platforms = platforms;
    }

    /// Platforms whose rectangle overlaps `rect`, in insertion order.
    pub fn platforms_overlapping(&self, rect: Aabb) -> impl Iterator<Item = &Platform> {
        self.platforms
            .iter()
            .filter(move |platform| platform.rect().overlaps(&rect))
    }
}
