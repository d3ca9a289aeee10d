//! Content domain: gameplay configuration schema.
//!
//! Every section has defaults, so a partial `gameplay.ron` only needs the
//! fields it overrides.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::level::{Aabb, WorldBounds};
use crate::movement::MovementTuning;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub world: WorldConfig,
    pub player: PlayerSpawnConfig,
    pub tuning: MovementTuning,
    /// JSON map to load. `None` selects the built-in tile level.
    pub map_path: Option<String>,
    pub probe: ProbeConfig,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            world: WorldConfig::default(),
            player: PlayerSpawnConfig::default(),
            tuning: MovementTuning::default(),
            map_path: None,
            probe: ProbeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub tile_size: i32,
    /// Fixed simulation rate in ticks per second.
    pub tick_hz: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            tile_size: 40,
            tick_hz: 60.0,
        }
    }
}

impl WorldConfig {
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerSpawnConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PlayerSpawnConfig {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            width: 40.0,
            height: 40.0,
        }
    }
}

impl PlayerSpawnConfig {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// Which body value the debug probe samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum ProbeSource {
    VelocityX,
    #[default]
    VelocityY,
    PositionX,
    PositionY,
    FacingAngle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub source: ProbeSource,
    /// Sample once every N ticks.
    pub sample_every: u32,
    /// Samples kept before the oldest is dropped.
    pub capacity: usize,
    /// Log a summary once every N samples; 0 disables the summary.
    pub report_every: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            source: ProbeSource::default(),
            sample_every: 6,
            capacity: 120,
            report_every: 60,
        }
    }
}
