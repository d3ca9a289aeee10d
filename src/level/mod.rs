//! Level domain: static platforms, the collision world and level files.

mod data;
mod generators;
mod geometry;
mod loader;
mod validation;
mod world;

#[cfg(test)]
mod tests;

pub use data::{DEFAULT_PLATFORM_COLOR, DEFAULT_PLATFORM_KIND, Platform, PlatformTag};
pub use generators::{DEFAULT_TILE_ROWS, GridSpec, generate_grid, platforms_from_tile_rows};
pub use geometry::Aabb;
pub use loader::{MapLoadError, load_map_file, map_to_json, parse_map_json, save_map_file};
pub use validation::{LevelWarning, validate_level};
pub use world::{CollisionWorld, WorldBounds};

use bevy::prelude::*;
use std::path::Path;

use crate::content::GameplayDefaults;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollisionWorld>()
            .add_systems(Startup, setup_level);
    }
}

/// Build the platforms for the configured level, falling back to the
/// built-in tile level when no map is configured or the map fails to load.
pub fn build_level_platforms(defaults: &GameplayDefaults) -> Vec<Platform> {
    let builtin = || platforms_from_tile_rows(&DEFAULT_TILE_ROWS, defaults.world.tile_size);

    let Some(map_path) = &defaults.map_path else {
        info!("No map configured, using built-in tile level");
        return builtin();
    };

    match load_map_file(Path::new(map_path)) {
        Ok(platforms) => {
            info!("Loaded map {} with {} platforms", map_path, platforms.len());
            platforms
        }
        Err(e) => {
            warn!("{}; using built-in tile level", e);
            builtin()
        }
    }
}

pub(crate) fn setup_level(defaults: Res<GameplayDefaults>, mut world: ResMut<CollisionWorld>) {
    let bounds = defaults.world.bounds();
    *world = CollisionWorld::with_platforms(bounds, build_level_platforms(&defaults));

    for warning in validate_level(&world, defaults.player.rect()) {
        warn!("Level check: {}", warning);
    }

    info!(
        "Level ready: {} platforms in {}x{}",
        world.len(),
        bounds.width,
        bounds.height
    );
}
