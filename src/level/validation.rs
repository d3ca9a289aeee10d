//! Level domain: sanity checks for loaded levels.
//!
//! These checks only report. The physics step runs the level exactly as
//! loaded, including degenerate platforms and a spawn inside geometry.

use crate::level::geometry::Aabb;
use crate::level::world::CollisionWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelWarning {
    /// Platform has zero width or height.
    DegeneratePlatform { index: usize },
    /// Platform overlaps the player's spawn rectangle.
    SpawnOverlap { index: usize },
    /// Platform extends past the world bounds.
    OutOfBounds { index: usize },
}

impl std::fmt::Display for LevelWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegeneratePlatform { index } => {
                write!(f, "platform #{} has zero width or height", index)
            }
            Self::SpawnOverlap { index } => {
                write!(f, "platform #{} overlaps the player spawn", index)
            }
            Self::OutOfBounds { index } => {
                write!(f, "platform #{} extends past the world bounds", index)
            }
        }
    }
}

pub fn validate_level(world: &CollisionWorld, spawn: Aabb) -> Vec<LevelWarning> {
    let bounds = world.bounds();
    let mut warnings = Vec::new();

    for (index, platform) in world.iter().enumerate() {
        let rect = platform.rect();

        if platform.is_degenerate() {
            warnings.push(LevelWarning::DegeneratePlatform { index });
        }
        if rect.overlaps(&spawn) {
            warnings.push(LevelWarning::SpawnOverlap { index });
        }
        if rect.exceeds(bounds.width, bounds.height) {
            warnings.push(LevelWarning::OutOfBounds { index });
        }
    }

    warnings
}
